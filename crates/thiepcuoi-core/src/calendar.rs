//! Calendar and map deep-links for the ceremonies.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{InvitationError, InvitationResult};

pub const CALENDAR_BASE: &str = "https://calendar.google.com/calendar/render";
pub const MAP_BASE: &str = "https://www.google.com/maps/search/";

const EVENT_DESCRIPTION: &str = "Cảm ơn bạn đã dành thời gian tham dự đám cưới của chúng tôi!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeddingEvent {
    pub id: String,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub location: String,
}

impl WeddingEvent {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.start_date.and_time(self.start_time)
    }

    /// Single-timestamp event creation link.
    pub fn calendar_url(&self) -> String {
        let stamp = self.starts_at().format("%Y%m%dT%H%M").to_string();
        format!(
            "{CALENDAR_BASE}?action=TEMPLATE&text={}&dates={stamp}/{stamp}&details={}&location={}",
            urlencoding::encode(&self.name),
            urlencoding::encode(&self.description),
            urlencoding::encode(&self.location),
        )
    }

    pub fn map_url(&self) -> String {
        format!(
            "{MAP_BASE}?api=1&query={}",
            urlencoding::encode(&self.location)
        )
    }
}

/// The two ceremonies on the invitation.
pub fn default_events() -> Vec<WeddingEvent> {
    let event = |id: &str, name: &str, date: (i32, u32, u32), time: (u32, u32), location: &str| {
        WeddingEvent {
            id: id.to_string(),
            name: name.to_string(),
            description: EVENT_DESCRIPTION.to_string(),
            start_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
            start_time: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap_or_default(),
            location: location.to_string(),
        }
    };

    vec![
        event(
            "event1",
            "LỄ VU QUY (Đám cưới Minh Tinh và Thị Lài)",
            (2025, 12, 21),
            (10, 30),
            "NHÀ SHVH THÔN VÂN TIÊN",
        ),
        event(
            "event2",
            "LỄ THÀNH HÔN (Đám cưới Minh Tình và Thị Lài)",
            (2025, 12, 25),
            (10, 0),
            "Khu Vui Chơi Trẻ Em Vinh Quang",
        ),
    ]
}

/// Look up an event by id.
pub fn find_event<'a>(events: &'a [WeddingEvent], id: &str) -> InvitationResult<&'a WeddingEvent> {
    events.iter().find(|e| e.id == id).ok_or_else(|| {
        debug!(event_id = %id, "Unknown event");
        InvitationError::EventNotFound(id.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_url() {
        let events = default_events();
        let url = find_event(&events, "event1").unwrap().calendar_url();
        assert!(url.starts_with(
            "https://calendar.google.com/calendar/render?action=TEMPLATE&text=L%E1%BB%84%20VU%20QUY"
        ));
        assert!(url.contains("&dates=20251221T1030/20251221T1030&"));
        assert!(url.ends_with("&location=NH%C3%80%20SHVH%20TH%C3%94N%20V%C3%82N%20TI%C3%8AN"));
    }

    #[test]
    fn test_map_url() {
        let events = default_events();
        let url = find_event(&events, "event2").unwrap().map_url();
        assert_eq!(
            url,
            "https://www.google.com/maps/search/?api=1&query=Khu%20Vui%20Ch%C6%A1i%20Tr%E1%BA%BB%20Em%20Vinh%20Quang"
        );
    }

    #[test]
    fn test_unknown_event() {
        let events = default_events();
        assert!(matches!(
            find_event(&events, "event3"),
            Err(InvitationError::EventNotFound(id)) if id == "event3"
        ));
    }
}
