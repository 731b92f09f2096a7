use serde::Deserialize;

use crate::error::LeadError;

/// Which form variant a request targets. Both variants run through the same
/// handler and differ only in required fields and spreadsheet range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// Landing-page capture: name and email.
    Short,
    /// Full signup form with background questions and profile links.
    Extended,
}

impl FormKind {
    /// Column range of the "Leads" tab this variant appends to.
    pub fn range(&self) -> &'static str {
        match self {
            FormKind::Short => "A:C",
            FormKind::Extended => "A:I",
        }
    }
}

/// Inbound form submission. Field names are camelCase on the wire; absent
/// fields deserialize to empty strings so presence checks and emptiness
/// checks collapse into one.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub ai_level: String,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub discovery: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub github: String,
}

impl LeadSubmission {
    fn trimmed(&self) -> LeadSubmission {
        LeadSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            ai_level: self.ai_level.trim().to_string(),
            background: self.background.trim().to_string(),
            discovery: self.discovery.trim().to_string(),
            linkedin: self.linkedin.trim().to_string(),
            twitter: self.twitter.trim().to_string(),
            github: self.github.trim().to_string(),
        }
    }

    /// Cells for the append call: timestamp first, then the form fields in
    /// declaration order. Optional fields land as empty cells when absent.
    pub fn to_row(&self, kind: FormKind, timestamp: &str) -> Vec<String> {
        match kind {
            FormKind::Short => vec![
                timestamp.to_string(),
                self.name.clone(),
                self.email.clone(),
            ],
            FormKind::Extended => vec![
                timestamp.to_string(),
                self.name.clone(),
                self.email.clone(),
                self.ai_level.clone(),
                self.background.clone(),
                self.discovery.clone(),
                self.linkedin.clone(),
                self.twitter.clone(),
                self.github.clone(),
            ],
        }
    }
}

/// Validate a submission for the given variant. The first violation wins and
/// nothing downstream runs on failure. On success every field in the returned
/// submission is whitespace-trimmed.
pub fn validate(raw: &LeadSubmission, kind: FormKind) -> Result<LeadSubmission, LeadError> {
    let lead = raw.trimmed();

    let mut required: Vec<(&str, &String)> = vec![("name", &lead.name), ("email", &lead.email)];
    if kind == FormKind::Extended {
        required.push(("aiLevel", &lead.ai_level));
        required.push(("background", &lead.background));
        required.push(("discovery", &lead.discovery));
    }
    for (field, value) in required {
        if value.is_empty() {
            return Err(LeadError::Invalid(format!("{} is required", field)));
        }
    }

    if !is_valid_email(&lead.email) {
        return Err(LeadError::Invalid("Invalid email".to_string()));
    }

    if kind == FormKind::Extended {
        let links = [
            ("linkedin", &lead.linkedin),
            ("twitter", &lead.twitter),
            ("github", &lead.github),
        ];
        for (field, value) in links {
            if !value.is_empty() && !is_http_url(value) {
                return Err(LeadError::Invalid(format!(
                    "{} must be an http(s) URL",
                    field
                )));
            }
        }
    }

    Ok(lead)
}

/// Syntactic sanity check only, not RFC validation: no whitespace, exactly
/// one "@" with something before it, and a "." splitting the domain into two
/// non-empty parts.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Prefix check only. Deliberately lenient: "http://" on its own passes,
/// matching the behavior the frontend already relies on.
pub fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
