//! Encoding of `include` / `filters` values.
//!
//! The API takes grouped values as `group:v1,v2;other:v3`. A [`FilterSpec`] is
//! either that string already encoded, or the groups themselves in the order
//! they should appear.

/// Input accepted by [`Client::set_include`](crate::Client::set_include),
/// [`Client::set_filters`](crate::Client::set_filters) and
/// [`Client::set_param`](crate::Client::set_param).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterSpec {
    /// Stored as-is.
    Raw(String),
    /// Group name and its values, in output order.
    Groups(Vec<(String, Vec<String>)>),
}

impl FilterSpec {
    /// Produces the parameter value.
    ///
    /// Values are trimmed and blank ones dropped. A group left with no values
    /// still appears as `name:`.
    pub fn encode(&self) -> String {
        match self {
            FilterSpec::Raw(raw) => raw.clone(),
            FilterSpec::Groups(groups) => groups
                .iter()
                .map(|(name, values)| format!("{}:{}", name, join_trimmed(values)))
                .collect::<Vec<_>>()
                .join(";"),
        }
    }
}

/// Trims each value, drops the blank ones and joins the rest with `,`.
pub(crate) fn join_trimmed<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .filter_map(|v| {
            let v = v.as_ref().trim();
            (!v.is_empty()).then(|| v.to_string())
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn collect_groups<K, I>(groups: impl IntoIterator<Item = (K, I)>) -> FilterSpec
where
    K: Into<String>,
    I: IntoIterator,
    I::Item: Into<String>,
{
    FilterSpec::Groups(
        groups
            .into_iter()
            .map(|(name, values)| (name.into(), values.into_iter().map(Into::into).collect()))
            .collect(),
    )
}

impl From<&str> for FilterSpec {
    fn from(raw: &str) -> Self {
        FilterSpec::Raw(raw.to_string())
    }
}

impl From<String> for FilterSpec {
    fn from(raw: String) -> Self {
        FilterSpec::Raw(raw)
    }
}

impl<K, I> From<Vec<(K, I)>> for FilterSpec
where
    K: Into<String>,
    I: IntoIterator,
    I::Item: Into<String>,
{
    fn from(groups: Vec<(K, I)>) -> Self {
        collect_groups(groups)
    }
}

impl<K, I, const N: usize> From<[(K, I); N]> for FilterSpec
where
    K: Into<String>,
    I: IntoIterator,
    I::Item: Into<String>,
{
    fn from(groups: [(K, I); N]) -> Self {
        collect_groups(groups)
    }
}
