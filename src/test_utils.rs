//! Shared test utilities and Mother pattern factories.
#![allow(dead_code)]

use crate::domain::{LaunchPage, LaunchRecord};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct LaunchMother;

impl LaunchMother {
    /// A record with details, a date and one flickr image.
    #[must_use]
    pub fn with_flight(flight_number: u32, name: &str) -> LaunchRecord {
        let mut launch = LaunchRecord::new(flight_number, name);
        launch.details = Some(format!("Mission {name} details"));
        launch.date_utc = Some("2010-06-04T18:45:00.000Z".to_string());
        launch.links.flickr.original = vec![format!(
            "https://farm8.staticflickr.com/{flight_number}/launch.jpg"
        )];
        launch
    }

    /// A record with no details, no date and no images.
    #[must_use]
    pub fn bare(flight_number: u32, name: &str) -> LaunchRecord {
        LaunchRecord::new(flight_number, name)
    }

    /// `count` consecutive records starting at `first_flight`.
    #[must_use]
    pub fn batch(first_flight: u32, count: u32) -> Vec<LaunchRecord> {
        (first_flight..first_flight + count)
            .map(|n| Self::with_flight(n, &format!("Mission-{n}")))
            .collect()
    }

    #[must_use]
    pub fn page(docs: Vec<LaunchRecord>, has_next_page: bool) -> LaunchPage {
        LaunchPage::new(docs, has_next_page)
    }

    /// First page of a realistic API response.
    #[must_use]
    pub fn page_json() -> String {
        r#"{
            "docs": [
                {
                    "fairings": { "reused": false },
                    "links": {
                        "patch": { "small": "https://images2.imgbox.com/3c/0e/T8iJcSN3_o.png" },
                        "flickr": { "small": [], "original": [] },
                        "webcast": "https://www.youtube.com/watch?v=0a_00nJ_Y88",
                        "wikipedia": "https://en.wikipedia.org/wiki/DemoSat"
                    },
                    "static_fire_date_utc": "2006-03-17T00:00:00.000Z",
                    "rocket": "5e9d0d95eda69955f709d1eb",
                    "success": false,
                    "details": "Engine failure at 33 seconds and loss of vehicle",
                    "flight_number": 1,
                    "name": "FalconSat",
                    "date_utc": "2006-03-24T22:30:00.000Z",
                    "upcoming": false,
                    "id": "5eb87cd9ffd86e000604b32a"
                },
                {
                    "links": {
                        "flickr": {
                            "small": [],
                            "original": ["https://farm9.staticflickr.com/8617/16789019815_f99a165dc5_o.jpg"]
                        },
                        "webcast": null
                    },
                    "details": null,
                    "flight_number": 4,
                    "name": "RatSat",
                    "date_utc": "2008-09-28T23:15:00.000Z",
                    "id": "5eb87cdbffd86e000604b32d"
                }
            ],
            "totalDocs": 205,
            "offset": 0,
            "limit": 10,
            "totalPages": 21,
            "page": 1,
            "pagingCounter": 1,
            "hasPrevPage": false,
            "hasNextPage": true,
            "prevPage": null,
            "nextPage": 2
        }"#
        .to_string()
    }

    /// Final page of a realistic API response.
    #[must_use]
    pub fn last_page_json() -> String {
        r#"{
            "docs": [
                {
                    "links": { "flickr": { "original": [] } },
                    "details": null,
                    "flight_number": 187,
                    "name": "Starlink 4-36 (v1.5)",
                    "date_utc": "2022-10-20T14:50:00.000Z"
                }
            ],
            "totalDocs": 205,
            "page": 21,
            "totalPages": 21,
            "hasNextPage": false
        }"#
        .to_string()
    }
}

// ============================================================================
// Rendering Helpers
// ============================================================================

/// Flattens a rendered buffer into lines of text.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            result.push_str(buffer[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            result.push('\n');
        }
    }
    result
}
