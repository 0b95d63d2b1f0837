//! README scaffold around the API docs: title, build badge, description,
//! installation and test instructions.

use crate::model::PackageDescriptor;
use anyhow::{Context, Result};
use regex::Regex;
use std::sync::LazyLock;

/// `<org>/<repo>.git` at the end of a repository URL. Segments stop at `/`,
/// `:` and `.` so both `https://host/org/repo.git` and `git@host:org/repo.git`
/// match.
static RE_ORG_REPO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^(.|/:)]+)/([^(.|/:)]+)\.git$").unwrap());

/// Title, optional badge and package description.
pub fn render_header(output: &mut String, pkg: &PackageDescriptor, travis: bool) -> Result<()> {
    output.push_str(&format!("# {}\n\n", pkg.name));

    if travis {
        let url = pkg
            .repository_url()
            .context("a repository url is required to render the build badge")?;
        tracing::debug!(url, "adding build badge");
        output.push_str(&build_badge(url)?);
        output.push_str("\n\n");
    }

    output.push_str(&pkg.description);
    output.push_str("\n\n");
    Ok(())
}

/// Installation and (when a test script exists) test instructions.
pub fn render_footer(output: &mut String, pkg: &PackageDescriptor) {
    output.push_str("## Installation\n\n");
    output.push_str("Requires [nodejs](http://nodejs.org/).\n\n");
    output.push_str(&format!("```sh\n$ npm install {}\n```\n\n", pkg.name));

    if pkg.has_test_script() {
        tracing::debug!(package = pkg.name.as_str(), "adding tests section");
        output.push_str("## Tests\n\n```sh\n$ npm test\n```\n\n");
    }
}

/// Travis CI status badge for the repository at `url`.
fn build_badge(url: &str) -> Result<String> {
    let (org, repo) = org_repo(url)
        .with_context(|| format!("cannot find <org>/<repo>.git in repository url: {}", url))?;
    Ok(format!(
        "[![build status](https://secure.travis-ci.org/{org}/{repo}.png)](http://travis-ci.org/{org}/{repo})"
    ))
}

fn org_repo(url: &str) -> Option<(&str, &str)> {
    let caps = RE_ORG_REPO.captures(url)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Repository, Scripts};

    fn package(url: Option<&str>, test: Option<&str>) -> PackageDescriptor {
        PackageDescriptor {
            name: "widget".to_string(),
            description: "A widget.".to_string(),
            repository: url.map(|u| Repository::Detailed {
                url: Some(u.to_string()),
            }),
            scripts: test.map(|t| Scripts {
                test: Some(t.to_string()),
            }),
        }
    }

    #[test]
    fn org_repo_https() {
        assert_eq!(
            org_repo("https://github.com/acme/widget.git"),
            Some(("acme", "widget"))
        );
    }

    #[test]
    fn org_repo_scp_style() {
        assert_eq!(
            org_repo("git@github.com:acme/widget.git"),
            Some(("acme", "widget"))
        );
    }

    #[test]
    fn org_repo_git_protocol() {
        assert_eq!(
            org_repo("git://github.com/acme/widget.git"),
            Some(("acme", "widget"))
        );
    }

    #[test]
    fn org_repo_requires_git_suffix() {
        assert_eq!(org_repo("https://github.com/acme/widget"), None);
    }

    #[test]
    fn header_without_badge() {
        let mut out = String::new();
        render_header(&mut out, &package(None, None), false).unwrap();
        assert_eq!(out, "# widget\n\nA widget.\n\n");
    }

    #[test]
    fn header_with_badge() {
        let mut out = String::new();
        render_header(
            &mut out,
            &package(Some("https://github.com/acme/widget.git"), None),
            true,
        )
        .unwrap();
        assert_eq!(
            out,
            "# widget\n\n\
             [![build status](https://secure.travis-ci.org/acme/widget.png)](http://travis-ci.org/acme/widget)\n\n\
             A widget.\n\n"
        );
    }

    #[test]
    fn badge_without_url_fails() {
        let mut out = String::new();
        let err = render_header(&mut out, &package(None, None), true).unwrap_err();
        assert!(err.to_string().contains("repository url is required"));
    }

    #[test]
    fn badge_with_unrecognized_url_fails() {
        let mut out = String::new();
        let err = render_header(&mut out, &package(Some("not a url"), None), true).unwrap_err();
        assert!(err.to_string().contains("cannot find <org>/<repo>.git"));
    }

    #[test]
    fn footer_with_tests() {
        let mut out = String::new();
        render_footer(&mut out, &package(None, Some("tap test")));
        assert_eq!(
            out,
            "## Installation\n\n\
             Requires [nodejs](http://nodejs.org/).\n\n\
             ```sh\n$ npm install widget\n```\n\n\
             ## Tests\n\n```sh\n$ npm test\n```\n\n"
        );
    }

    #[test]
    fn footer_without_tests() {
        let mut out = String::new();
        render_footer(&mut out, &package(None, None));
        assert!(!out.contains("## Tests"));
    }
}
