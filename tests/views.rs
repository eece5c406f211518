#![forbid(unsafe_code)]
use shiftboard::{
    model::{Shift, ShiftId, TimeRange},
    view::{format_time, ShiftView},
};

fn view(sh: u32, sm: u32, eh: u32, em: u32) -> ShiftView {
    let range = TimeRange::from_hm(sh, sm, eh, em).unwrap();
    ShiftView::from(&Shift::new(ShiftId::new("7"), "alice", range))
}

#[test]
fn midnight_and_noon_use_twelve_hour_clock() {
    let v = view(0, 0, 12, 0);
    assert_eq!(v.start_time, "12:00 AM");
    assert_eq!(v.end_time, "12:00 PM");
}

#[test]
fn view_line_rendering() {
    insta::assert_snapshot!(view(9, 5, 17, 45).to_string(), @"7 | alice | 09:05 AM → 05:45 PM");
}

#[test]
fn view_json_field_names() {
    let json = serde_json::to_string(&view(0, 0, 8, 0)).unwrap();
    insta::assert_snapshot!(json, @r#"{"id":"7","user":"alice","startTime":"12:00 AM","endTime":"08:00 AM"}"#);
}

#[test]
fn format_time_pads_hours() {
    let range = TimeRange::from_hm(1, 2, 23, 59).unwrap();
    assert_eq!(format_time(range.start()), "01:02 AM");
    assert_eq!(format_time(range.end()), "11:59 PM");
}
