//! Terminal tables for records, statistics and the dashboard.

use std::collections::BTreeMap;

use backoffice_client::User;
use backoffice_dashboard::{Dashboard, DomainMetrics};
use backoffice_model::format::{
    Badge, Tone, format_count, format_date, format_percentage, format_rating, format_relative,
    truncate,
};
use backoffice_model::{Domain, Record, Statistics};
use chrono::{DateTime, Utc};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// List cells longer than this are shortened.
const LIST_CELL_CHARS: usize = 40;

pub fn domains_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Domain"),
        header_cell("Name"),
        header_cell("GraphQL type"),
    ]);
    apply_table_style(&mut table);
    for domain in Domain::ALL {
        table.add_row(vec![
            Cell::new(domain.as_str()).fg(Color::Blue),
            Cell::new(domain.label()),
            dim_cell(domain.spec().type_name),
        ]);
    }
    table
}

/// One row per record with a colored status badge in front.
pub fn records_table<T: Record>(records: &[&T]) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Status")];
    header.extend(T::COLUMNS.iter().map(|column| header_cell(column)));
    table.set_header(header);
    apply_table_style(&mut table);
    for record in records {
        let mut row = vec![badge_cell(record.badge())];
        row.extend(
            record
                .csv_row()
                .iter()
                .map(|value| Cell::new(truncate(value, LIST_CELL_CHARS))),
        );
        table.add_row(row);
    }
    table
}

/// Every column of one record, untruncated.
pub fn record_detail<T: Record>(record: &T) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Status"), badge_cell(record.badge())]);
    for (column, value) in T::COLUMNS.iter().zip(record.csv_row()) {
        table.add_row(vec![Cell::new(column).add_attribute(Attribute::Bold), Cell::new(value)]);
    }
    table
}

pub fn statistics_table(domain: Domain, stats: &Statistics) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(domain.label()), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Total"), Cell::new(stats.total).add_attribute(Attribute::Bold)]);
    table.add_row(vec![Cell::new("Active"), Cell::new(stats.active).fg(Color::Green)]);
    table.add_row(vec![Cell::new("Inactive"), dim_cell(stats.inactive)]);
    table.add_row(vec![Cell::new("Recent (30 days)"), Cell::new(stats.recent_count)]);
    table.add_row(vec![
        Cell::new("Growth"),
        Cell::new(format_percentage(stats.growth_percentage)),
    ]);
    for (category, count) in &stats.by_category {
        table.add_row(vec![
            dim_cell(format!("  {category}")),
            Cell::new(format!(
                "{count} ({})",
                format_percentage(stats.category_percentage(category))
            )),
        ]);
    }
    table
}

/// Base metrics of every domain plus a total row.
pub fn dashboard_table(dashboard: &Dashboard) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Domain"),
        header_cell("Total"),
        header_cell("Active"),
        header_cell("Inactive"),
        header_cell("Recent"),
        header_cell("Growth"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for metrics in dashboard.domains() {
        table.add_row(metrics_row(metrics));
    }
    table.add_row(vec![
        Cell::new("TOTAL").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new(dashboard.overview.total_records).add_attribute(Attribute::Bold),
        Cell::new(dashboard.overview.total_active).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    table
}

fn metrics_row(metrics: &DomainMetrics) -> Vec<Cell> {
    let name = Cell::new(metrics.domain.label());
    if !metrics.loaded {
        return vec![
            name.fg(Color::Red),
            Cell::new("unavailable").fg(Color::Red),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
        ];
    }
    vec![
        name.fg(Color::Blue),
        Cell::new(metrics.total),
        Cell::new(metrics.active),
        dim_cell(metrics.inactive),
        Cell::new(metrics.recent_count),
        Cell::new(format_percentage(metrics.growth_percentage)),
    ]
}

/// One line per domain-specific highlight.
pub fn dashboard_highlights(dashboard: &Dashboard) -> Vec<String> {
    let mut lines = Vec::new();
    let blog = &dashboard.blog_posts;
    lines.push(format!(
        "Blog: {} published, {} drafts, {} archived, {} views ({} per post)",
        blog.published,
        blog.drafts,
        blog.archived,
        format_count(blog.total_views),
        format_count(blog.average_views.round() as u64),
    ));
    if let Some(top) = &blog.top_post {
        lines.push(format!(
            "Top post: {} ({} views)",
            truncate(&top.title, 60),
            format_count(top.views)
        ));
    }
    let testimonials = &dashboard.testimonials;
    let rounded = testimonials.average_rating.round().clamp(0.0, 5.0) as u8;
    lines.push(format!(
        "Testimonials: average {:.1} {} over {}",
        testimonials.average_rating,
        format_rating(rounded),
        testimonials.base.total
    ));
    if !dashboard.clients.by_industry.is_empty() {
        let shares: Vec<String> = dashboard
            .clients
            .by_industry
            .iter()
            .map(|share| format!("{} {}", share.industry, format_percentage(share.percentage)))
            .collect();
        lines.push(format!("Clients by industry: {}", shares.join(", ")));
    }
    lines.push(format!(
        "Contact requests: {} unread",
        dashboard.contact_requests.unread
    ));
    let projects: Vec<String> = dashboard
        .projects
        .by_status
        .iter()
        .map(|(status, count)| format!("{} {count}", status.badge().label.to_lowercase()))
        .collect();
    lines.push(format!(
        "Projects: {}, {} featured",
        projects.join(", "),
        dashboard.projects.featured
    ));
    lines.push(format!("Open positions: {}", grouped(&dashboard.careers.groups)));
    lines.push(format!("Team: {}", grouped(&dashboard.team_members.groups)));
    lines.push(format!(
        "Solutions: {} features, {} benefits",
        dashboard.solutions.total_features, dashboard.solutions.total_benefits
    ));
    lines.push(format!(
        "Certifications: {} expired, {} expiring soon",
        dashboard.certifications.expired, dashboard.certifications.expiring_soon
    ));
    lines.push(format!("FAQs: {}", grouped(&dashboard.faqs.groups)));
    if !dashboard.overview.failed_domains.is_empty() {
        let failed: Vec<&str> = dashboard
            .overview
            .failed_domains
            .iter()
            .map(Domain::label)
            .collect();
        lines.push(format!("Unavailable: {}", failed.join(", ")));
    }
    lines
}

/// `Ada Lovelace <ada@example.com>`, or just the address when unnamed.
pub fn user_line(user: &User) -> String {
    match user.name.as_deref().map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("{name} <{}>", user.email),
        None => user.email.clone(),
    }
}

/// `Generated Jun 1, 2024 (just now)`.
pub fn generated_line(generated_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format!(
        "Generated {} ({})",
        format_date(Some(generated_at)),
        format_relative(Some(generated_at), now)
    )
}

fn grouped(groups: &BTreeMap<String, usize>) -> String {
    if groups.is_empty() {
        return "-".to_string();
    }
    groups
        .iter()
        .map(|(name, count)| format!("{name} {count}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn badge_cell(badge: Badge) -> Cell {
    let color = match badge.tone {
        Tone::Success => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Danger => Color::Red,
        Tone::Info => Color::Cyan,
        Tone::Neutral => Color::DarkGrey,
    };
    Cell::new(badge.label).fg(color)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: Option<&str>) -> User {
        User {
            id: "7".to_string(),
            name: name.map(str::to_string),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn user_line_falls_back_to_the_address() {
        assert_eq!(user_line(&user(Some("Ada"))), "Ada <ada@example.com>");
        assert_eq!(user_line(&user(None)), "ada@example.com");
        assert_eq!(user_line(&user(Some("  "))), "ada@example.com");
    }
}
