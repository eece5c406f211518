use crate::model::{SearchWindow, Shift};

/// Créneaux entièrement contenus dans `window`, triés par heure de début.
///
/// Le tri est stable : à début égal, l'ordre d'insertion est conservé.
pub fn search<'a, I>(shifts: I, window: &SearchWindow) -> Vec<Shift>
where
    I: IntoIterator<Item = &'a Shift>,
{
    let mut found: Vec<Shift> = shifts
        .into_iter()
        .filter(|s| window.contains(&s.range))
        .cloned()
        .collect();
    found.sort_by_key(|s| s.range.start());
    found
}
