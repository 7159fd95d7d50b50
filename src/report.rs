use url::form_urlencoded::Serializer;

/// `ForceNewBug` is always sent with its default; duplicate-forcing
/// submissions are never requested.
const FORCE_NEW_BUG: &str = "0";

/// A single assembled bug report.
///
/// The fields map one to one onto the form fields of the FogBugz
/// `scoutSubmit` endpoint. A report is built by [`Scout::report`] and handed
/// to the [`Transport`]; it is immutable once built, so later prefix changes
/// never affect a report already in flight.
///
/// [`Scout::report`]: crate::Scout::report
/// [`Transport`]: crate::Transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// FogBugz user the bug is filed as (`ScoutUserName`).
    pub user_name: String,
    /// Project the bug is filed under (`ScoutProject`).
    pub project: String,
    /// Area the bug is filed under (`ScoutArea`).
    pub area: String,
    /// Bug title: the scout's prefix followed by the caller's title
    /// (`Description`).
    pub description: String,
    /// The captured stack trace (`Extra`).
    pub extra: String,
    /// Contact email (`Email`).
    pub email: String,
    /// Opaque pass-through consumed by the tracker (`ScoutDefaultMessage`).
    pub default_message: String,
    /// Opaque pass-through consumed by the tracker (`FriendlyResponse`).
    pub friendly_response: String,
}

impl Report {
    /// The form fields in wire order.
    pub fn fields(&self) -> [(&'static str, &str); 9] {
        [
            ("ScoutUserName", &self.user_name),
            ("ScoutProject", &self.project),
            ("ScoutArea", &self.area),
            ("Description", &self.description),
            ("ForceNewBug", FORCE_NEW_BUG),
            ("Extra", &self.extra),
            ("Email", &self.email),
            ("ScoutDefaultMessage", &self.default_message),
            ("FriendlyResponse", &self.friendly_response),
        ]
    }

    /// Serializes the report as an `application/x-www-form-urlencoded` body.
    pub fn to_urlencoded(&self) -> String {
        let mut body = Serializer::new(String::new());
        for (key, value) in self.fields() {
            body.append_pair(key, value);
        }
        body.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Report {
        Report {
            user_name: "alice".into(),
            project: "P1".into(),
            area: "core".into(),
            description: "disk full".into(),
            extra: "stack".into(),
            email: "a@x.com".into(),
            default_message: String::new(),
            friendly_response: String::new(),
        }
    }

    #[test]
    fn fields_are_exact_and_ordered() {
        let report = example();
        let fields = report.fields();
        assert_eq!(fields[0], ("ScoutUserName", "alice"));
        assert_eq!(fields[1], ("ScoutProject", "P1"));
        assert_eq!(fields[2], ("ScoutArea", "core"));
        assert_eq!(fields[3], ("Description", "disk full"));
        assert_eq!(fields[4], ("ForceNewBug", "0"));
        assert_eq!(fields[5], ("Extra", "stack"));
        assert_eq!(fields[6], ("Email", "a@x.com"));
        assert_eq!(fields[7], ("ScoutDefaultMessage", ""));
        assert_eq!(fields[8], ("FriendlyResponse", ""));
    }

    #[test]
    fn urlencoding_percent_escapes_values() {
        let body = example().to_urlencoded();
        assert!(body.contains("ScoutUserName=alice"));
        assert!(body.contains("Description=disk+full"));
        assert!(body.contains("Email=a%40x.com"));
        assert!(body.contains("ForceNewBug=0"));
    }
}
