use chrono::{NaiveDateTime, Timelike};
use rand::RngExt;
use std::time::Instant;

pub struct TimeEstimation;

impl TimeEstimation {
    pub fn estimate<T, F: FnOnce() -> T>(func: F) -> (T, u128) {
        let start = Instant::now();

        let result = func();

        (result, start.elapsed().as_millis())
    }
}

pub struct IntegerUtils;

impl IntegerUtils {
    pub fn random(min: i32, max: i32) -> i32 {
        rand::rng().random_range(min..=max)
    }
}

pub struct DateUtils;

impl DateUtils {
    pub fn is_same_day(left: NaiveDateTime, right: NaiveDateTime) -> bool {
        left.date() == right.date()
    }

    pub fn format_event_day(date: NaiveDateTime) -> String {
        date.format("%A, %d %B %Y").to_string()
    }

    pub fn format_event_time(date: NaiveDateTime) -> String {
        format!("{:02}:{:02}", date.hour(), date.minute())
    }

    pub fn format_timestamp(date: NaiveDateTime) -> String {
        date.format("%d %b %Y, %H:%M").to_string()
    }
}
