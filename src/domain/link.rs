use serde::Serialize;

/// One `link_label[]`/`link_url[]` position of a submitted profile form,
/// paired up before any filtering happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDraft {
    pub label: String,
    pub url: String,
}

/// A profile link. Only exists with a non-empty url.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    label: String,
    url: String,
}

impl Link {
    pub fn parse(draft: LinkDraft) -> Option<Self> {
        if draft.url.is_empty() {
            return None;
        }
        Some(Self {
            label: draft.label,
            url: draft.url,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Pairs the parallel label/url fields by position. One draft is produced per
/// url; a url without a label at the same index gets an empty label, labels
/// past the last url are dropped.
pub fn pair_link_fields(labels: Vec<String>, urls: Vec<String>) -> Vec<LinkDraft> {
    let mut labels = labels.into_iter();
    urls.into_iter()
        .map(|url| LinkDraft {
            label: labels.next().unwrap_or_default(),
            url,
        })
        .collect()
}

pub fn parse_links(drafts: impl IntoIterator<Item = LinkDraft>) -> Vec<Link> {
    drafts.into_iter().filter_map(Link::parse).collect()
}

pub fn reconcile_links(labels: Vec<String>, urls: Vec<String>) -> Vec<Link> {
    parse_links(pair_link_fields(labels, urls))
}
