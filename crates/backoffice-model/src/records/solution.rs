//! Solutions and their feature / benefit lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::opt;
use crate::domain::Domain;
use crate::format::format_date;
use crate::record::Record;
use crate::timestamp;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolutionFeature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolutionBenefit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub id: String,
    pub application_id: Option<String>,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub features: Vec<SolutionFeature>,
    #[serde(default)]
    pub benefits: Vec<SolutionBenefit>,
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
pub struct SolutionInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Replaces the whole feature list when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<SolutionFeature>>,
    /// Replaces the whole benefit list when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<SolutionBenefit>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl Record for Solution {
    type Input = SolutionInput;

    const DOMAIN: Domain = Domain::Solutions;
    const FIELDS: &'static str = "id application_id title description icon category \
                                  features { id title description } \
                                  benefits { id title description } \
                                  is_active order created_at updated_at";
    const COLUMNS: &'static [&'static str] = &[
        "ID", "Title", "Category", "Features", "Benefits", "Active", "Order", "Created",
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

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.description.as_deref());
        fields.extend(self.features.iter().map(|f| f.title.as_str()));
        fields.extend(self.benefits.iter().map(|b| b.title.as_str()));
        fields
    }

    fn toggle_input(&self) -> SolutionInput {
        SolutionInput {
            is_active: Some(!self.is_active),
            ..SolutionInput::default()
        }
    }

    fn order_input(order: i32) -> SolutionInput {
        SolutionInput {
            order: Some(order),
            ..SolutionInput::default()
        }
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            opt(self.category.as_deref()),
            self.features.len().to_string(),
            self.benefits.len().to_string(),
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
    fn children_decode_without_ids() {
        let json = r#"{
            "id": "s1",
            "title": "Analytics",
            "features": [{"title": "Dashboards"}, {"id": "f2", "title": "Exports"}],
            "benefits": [{"title": "Faster reporting", "description": "Hours, not days"}]
        }"#;
        let solution: Solution = serde_json::from_str(json).unwrap();
        assert_eq!(solution.features.len(), 2);
        assert_eq!(solution.features[0].id, None);
        assert_eq!(solution.benefits[0].description.as_deref(), Some("Hours, not days"));
        assert_eq!(solution.csv_row()[3], "2");
    }

    #[test]
    fn input_omits_untouched_children() {
        let input = SolutionInput {
            title: Some("Renamed".to_string()),
            ..SolutionInput::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value, serde_json::json!({ "title": "Renamed" }));
    }
}
