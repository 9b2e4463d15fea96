//! Informational pages shown by `downdetector page <id>`.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    About,
    Contact,
    Guide,
    Privacy,
    Terms,
    Dmca,
    Article,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::About,
        Page::Contact,
        Page::Guide,
        Page::Privacy,
        Page::Terms,
        Page::Dmca,
        Page::Article,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Page::About => "about",
            Page::Contact => "contact",
            Page::Guide => "guide",
            Page::Privacy => "privacy",
            Page::Terms => "tos",
            Page::Dmca => "dmca",
            Page::Article => "article",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::About => "About Us",
            Page::Contact => "Contact",
            Page::Guide => "How to Use This Tool",
            Page::Privacy => "Privacy Policy",
            Page::Terms => "Terms of Service",
            Page::Dmca => "DMCA",
            Page::Article => "The Ultimate Guide to Website Uptime & Server Health",
        }
    }

    fn lead(&self) -> &'static str {
        match self {
            Page::About => ABOUT,
            Page::Contact => CONTACT,
            Page::Guide => GUIDE,
            Page::Privacy => PRIVACY,
            Page::Terms => TERMS,
            Page::Dmca => DMCA,
            Page::Article => ARTICLE_LEAD,
        }
    }

    /// Text that is only shown once the page is expanded. Only the article has any.
    fn more(&self) -> Option<&'static str> {
        match self {
            Page::Article => Some(ARTICLE_BODY),
            _ => None,
        }
    }

    pub fn is_expandable(&self) -> bool {
        self.more().is_some()
    }

    /// Render the page. `expanded` only matters for expandable pages.
    pub fn render(&self, expanded: bool) -> String {
        let title = self.title();
        let mut out = format!(
            "{title}\n{}\n\n{}\n",
            "=".repeat(title.chars().count()),
            self.lead()
        );
        match (self.more(), expanded) {
            (Some(more), true) => {
                out.push('\n');
                out.push_str(more);
                out.push('\n');
            }
            (Some(_), false) => {
                out.push_str(&format!(
                    "\n(run `downdetector page {} --expand` to read more)\n",
                    self.id()
                ));
            }
            (None, _) => {}
        }
        out
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = match wanted.as_str() {
            "terms" => "tos",
            other => other,
        };
        Page::ALL
            .into_iter()
            .find(|page| page.id() == wanted)
            .ok_or_else(|| {
                let ids: Vec<&str> = Page::ALL.iter().map(Page::id).collect();
                format!("unknown page {s:?}, expected one of: {}", ids.join(", "))
            })
    }
}

const ABOUT: &str = "This website down detector is a free tool that gives an instant status check for any \
website. When a site you need is unavailable it is hard to tell whether the problem is on your end or \
theirs. The check is sent from this machine to the site directly and reports what the server answered.";

const CONTACT: &str = "For questions, feedback or support, contact the people who run this installation.";

const GUIDE: &str = "1. Enter a URL: type the website address, e.g. `downdetector check example.com`.
   Addresses without a scheme are checked over https.
2. Review the result:
   UP             the website answered with a 2xx or 3xx status.
   DOWN           the website answered with an error status, or did not answer at all.
   ERROR          the input is not a usable address.
   Status Code    the HTTP status the server returned, N/A when there was no answer.
   Response Time  how long the server took to answer, in milliseconds.";

const PRIVACY: &str = "The URLs you check are not stored, shared or sold. Every check is a single \
anonymous request to the site you entered and nothing is kept once the result is shown.";

const TERMS: &str = "By using this tool you agree not to use it for malicious purposes, such as overloading \
servers with excessive requests. The tool is provided \"as is\" without any warranties. Results may not be \
correct in every scenario due to the complex nature of the internet.";

const DMCA: &str = "We respect the intellectual property of others. If you believe content shown by this tool \
infringes your copyright, contact the operators of this installation with the details of your takedown request.";

const ARTICLE_LEAD: &str = "Your website is your most critical asset. When it goes down you lose visibility, \
revenue and customer trust. Understanding why sites go down and how to check their status is essential for \
any online presence.";

const ARTICLE_BODY: &str = "Why website uptime is non-negotiable
------------------------------------
Uptime measures how long a website is operational and accessible. Reputable hosts aim for \"five nines\", \
99.999% uptime, which is just over five minutes of downtime per year. Downtime costs sales, search engine \
rankings and credibility.

Local outage vs. global outage
------------------------------
A local outage means the site is fine but something on your side (ISP, router, firewall) blocks access. \
A global outage means the server is unreachable for everyone. Checking from an independent machine tells \
the two apart.

Decoding HTTP status codes
--------------------------
2xx (Success)       the request succeeded. 200 OK means the site is UP.
3xx (Redirection)   the server answered and points elsewhere. Still UP.
4xx (Client Error)  the server answered, but refused or could not find the page. Reported DOWN.
5xx (Server Error)  the server failed. 500 or 503 clearly mean the site is DOWN.

Common culprits
---------------
- Traffic spikes that overwhelm the server.
- Hosting provider hardware or network failures.
- Software errors, such as a faulty deploy or plugin (500).
- An expired domain name that stops resolving.
- DDoS attacks flooding the server with junk traffic.

Interpreting key status codes
-----------------------------
200 OK                     Site is UP. Normal operation.
403 Forbidden              Access denied. No permission to view.
404 Not Found              Server is up, the page is not.
500 Internal Server Error  Code bug or misconfiguration.
502 Bad Gateway            Invalid response from an upstream server.
503 Service Unavailable    Overloaded or in maintenance.
504 Gateway Timeout        No timely response from an upstream server.

FAQ
---
Why is response time important?
  A slow answer, even when the site is UP, can point to an overloaded server or network congestion, which \
often comes before a full outage.
Is the regional panel a real measurement?
  No. It repeats the result of the single check for each listed location.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids() {
        for page in Page::ALL {
            assert_eq!(page.id().parse::<Page>(), Ok(page));
        }
        assert_eq!(" Terms ".parse::<Page>(), Ok(Page::Terms));
        assert_eq!("DMCA".parse::<Page>(), Ok(Page::Dmca));
        let err = "faq".parse::<Page>().expect_err("unknown page");
        assert!(err.contains("about, contact, guide, privacy, tos, dmca, article"));
    }

    #[test]
    fn test_only_article_expands() {
        let expandable: Vec<Page> = Page::ALL.into_iter().filter(Page::is_expandable).collect();
        assert_eq!(expandable, vec![Page::Article]);
    }

    #[test]
    fn test_expand_toggle() {
        let collapsed = Page::Article.render(false);
        let expanded = Page::Article.render(true);
        assert!(collapsed.contains(ARTICLE_LEAD));
        assert!(!collapsed.contains("Decoding HTTP status codes"));
        assert!(collapsed.contains("--expand"));
        assert!(expanded.contains("Decoding HTTP status codes"));
        assert!(!expanded.contains("--expand"));
    }

    #[test]
    fn test_plain_page_ignores_expand() {
        assert_eq!(Page::Privacy.render(true), Page::Privacy.render(false));
        assert!(Page::Privacy.render(false).starts_with("Privacy Policy\n==============\n"));
    }
}
