use chrono::{NaiveDateTime, Timelike};

pub fn greeting(now: NaiveDateTime) -> String {
    let salutation = match now.hour() {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    };
    format!("{}, today is: {}", salutation, now.format("%A, %B %d, %Y"))
}
