//! Command-line arguments and their mapping onto a [`Client`].

use clap::Parser;
use sportmonks_api::{Client, FilterSpec, Transport};

#[derive(Parser)]
#[command(name = "sportmonks")]
#[command(about = "Query the Sportmonks Football API")]
pub struct Cli {
    /// Resource path relative to the API root (e.g. fixtures, leagues/8)
    pub path: String,

    /// Includes, already encoded (e.g. "events;lineups")
    #[arg(long)]
    pub include: Option<String>,

    /// Filters, already encoded (e.g. "eventTypes:14,19")
    #[arg(long, conflicts_with = "filter")]
    pub filters: Option<String>,

    /// One filter group as GROUP:V1,V2. Repeat for more groups
    #[arg(long, value_parser = parse_filter_group)]
    pub filter: Vec<(String, Vec<String>)>,

    /// Comma-separated fields to select
    #[arg(long)]
    pub select: Option<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<i64>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<i64>,

    /// Timezone for dates in the response; overrides SPORTMONKS_TIMEZONE
    #[arg(long)]
    pub timezone: Option<String>,

    /// API root; defaults to the production Football API
    #[arg(long)]
    pub base_url: Option<String>,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,
}

impl Cli {
    /// Copies every parameter given on the command line into `client`.
    pub fn apply<T: Transport>(&self, client: &mut Client<T>) {
        if let Some(include) = &self.include {
            client.set_include(include.as_str());
        }
        if let Some(filters) = &self.filters {
            client.set_filters(filters.as_str());
        }
        if !self.filter.is_empty() {
            client.set_filters(FilterSpec::Groups(self.filter.clone()));
        }
        if let Some(select) = &self.select {
            client.set_select(select.split(','));
        }
        if let Some(page) = self.page {
            client.set_page(page);
        }
        if let Some(per_page) = self.per_page {
            client.set_per_page(per_page);
        }
    }
}

/// Parses `group:v1,v2` into a group name and its values.
pub fn parse_filter_group(s: &str) -> Result<(String, Vec<String>), String> {
    let (name, values) = s
        .split_once(':')
        .ok_or_else(|| format!("expected GROUP:VALUES, got \"{}\"", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing filter group name in \"{}\"", s));
    }
    Ok((
        name.to_string(),
        values.split(',').map(|v| v.to_string()).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sportmonks_api::{Config, ParamValue};

    #[test]
    fn parses_filter_group() {
        assert_eq!(
            parse_filter_group("events:goal,card").unwrap(),
            ("events".to_string(), vec!["goal".to_string(), "card".to_string()])
        );
        assert_eq!(
            parse_filter_group("lineups:").unwrap(),
            ("lineups".to_string(), vec!["".to_string()])
        );
    }

    #[test]
    fn rejects_malformed_filter_group() {
        assert!(parse_filter_group("events").is_err());
        assert!(parse_filter_group(" :goal").is_err());
    }

    #[test]
    fn flags_become_params() {
        let cli = Cli::try_parse_from([
            "sportmonks",
            "fixtures",
            "--include",
            "events",
            "--filter",
            "eventTypes:14, 19",
            "--filter",
            "fixtureLeagues:",
            "--select",
            "name, ,id",
            "--page",
            "2",
            "--per-page",
            "50",
        ])
        .unwrap();
        assert_eq!(cli.path, "fixtures");

        let mut client =
            Client::with_base_url(Config::new("tok"), "https://example.com").unwrap();
        cli.apply(&mut client);

        let params = client.params();
        let text = |name: &str| params.get(name).map(|v| v.to_string());
        assert_eq!(text("include").as_deref(), Some("events"));
        assert_eq!(
            text("filters").as_deref(),
            Some("eventTypes:14,19;fixtureLeagues:")
        );
        assert_eq!(text("select").as_deref(), Some("name,id"));
        assert_eq!(params.get("page"), Some(&ParamValue::Int(2)));
        assert_eq!(params.get("per_page"), Some(&ParamValue::Int(50)));
    }

    #[test]
    fn raw_and_structured_filters_conflict() {
        let result = Cli::try_parse_from([
            "sportmonks",
            "fixtures",
            "--filters",
            "a:1",
            "--filter",
            "b:2",
        ]);
        assert!(result.is_err());
    }
}
