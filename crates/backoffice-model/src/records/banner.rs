//! Homepage hero banners.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::opt;
use crate::domain::Domain;
use crate::format::format_date;
use crate::record::Record;
use crate::timestamp;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub id: String,
    pub application_id: Option<String>,
    #[serde(default)]
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub button_text: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl Record for Banner {
    type Input = BannerInput;

    const DOMAIN: Domain = Domain::Banners;
    const FIELDS: &'static str = "id application_id title subtitle image_url link_url \
                                  button_text is_active order created_at updated_at";
    const COLUMNS: &'static [&'static str] = &[
        "ID", "Title", "Subtitle", "Button", "Link", "Active", "Order", "Created",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn application_id(&self) -> Option<&str> {
        self.application_id.as_deref()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.subtitle.as_deref());
        fields
    }

    fn toggle_input(&self) -> BannerInput {
        BannerInput {
            is_active: Some(!self.is_active),
            ..BannerInput::default()
        }
    }

    fn order_input(order: i32) -> BannerInput {
        BannerInput {
            order: Some(order),
            ..BannerInput::default()
        }
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            opt(self.subtitle.as_deref()),
            opt(self.button_text.as_deref()),
            opt(self.link_url.as_deref()),
            self.is_active.to_string(),
            self.order.to_string(),
            format_date(self.created_at),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_sql_timestamps_and_missing_optionals() {
        let banner: Banner = serde_json::from_value(serde_json::json!({
            "id": "7",
            "title": "Spring sale",
            "is_active": true,
            "order": 2,
            "created_at": "2024-03-01 08:00:00"
        }))
        .unwrap();
        assert_eq!(banner.title, "Spring sale");
        assert!(banner.subtitle.is_none());
        assert_eq!(format_date(banner.created_at), "Mar 1, 2024");
    }

    #[test]
    fn input_omits_unset_fields() {
        let banner = Banner {
            id: "1".into(),
            is_active: true,
            ..Banner::default()
        };
        let json = serde_json::to_value(banner.toggle_input()).unwrap();
        assert_eq!(json, serde_json::json!({ "is_active": false }));
    }

    #[test]
    fn csv_row_matches_columns() {
        let banner = Banner::default();
        assert_eq!(banner.csv_row().len(), Banner::COLUMNS.len());
    }
}
