//! Peer quiz addressing.

/// Errors produced while parsing a peer address.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("peer slug {slug:?} is not of the form project__user")]
    MalformedSlug { slug: String },

    #[error("peer url {url:?} does not start with a project.user.host hostname")]
    MalformedUrl { url: String },
}

/// Identifies a community quiz by its project name and creator.
///
/// Peers are named two ways: as a `project__user` slug inside this client,
/// and as a full URL in a quiz document's `external` list. Both carry the
/// same two components; the hosting domain is supplied separately when the
/// database endpoint is built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PeerAddress {
    project: String,
    user: String,
}

impl PeerAddress {
    pub fn new(project: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            user: user.into(),
        }
    }

    /// Parses a `project__user` slug.
    pub fn from_slug(slug: &str) -> Result<Self, AddressError> {
        let malformed = || AddressError::MalformedSlug {
            slug: slug.to_string(),
        };
        let (project, user) = slug.split_once("__").ok_or_else(malformed)?;
        if project.is_empty() || user.is_empty() {
            return Err(malformed());
        }
        Ok(Self::new(project, user))
    }

    /// Extracts the address from a peer quiz URL, e.g.
    /// `https://aluraquiz.devsoutinho.vercel.app`.
    ///
    /// The first two hostname labels are the project and the creator; at
    /// least one more label (the hosting domain) must follow.
    pub fn from_external_url(url: &str) -> Result<Self, AddressError> {
        let malformed = || AddressError::MalformedUrl {
            url: url.to_string(),
        };

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .unwrap_or(url);
        let host = match rest.split(['/', '?', '#']).next() {
            Some(host) => host.split(':').next().unwrap_or(""),
            None => "",
        };

        let mut labels = host.split('.');
        let project = labels.next().filter(|l| !l.is_empty()).ok_or_else(malformed)?;
        let user = labels.next().filter(|l| !l.is_empty()).ok_or_else(malformed)?;
        match labels.next() {
            Some(domain) if !domain.is_empty() => {}
            _ => return Err(malformed()),
        }

        Ok(Self::new(project, user))
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// `project__user` form used in routes and logs.
    pub fn slug(&self) -> String {
        format!("{}__{}", self.project, self.user)
    }

    /// Database endpoint of this peer on the given hosting domain.
    pub fn db_url(&self, host: &str) -> String {
        format!("https://{}.{}.{}/api/db", self.project, self.user, host)
    }
}

impl std::fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}__{}", self.project, self.user)
    }
}
