// ABOUTME: Removes scripts, styles, noscript blocks, and known ad or video-ad containers.
// ABOUTME: First pass in the pipeline so later passes never see executable or ad markup.

use dom_query::Document;

use crate::pipeline::{Pass, PassContext};

const DISALLOWED_SELECTOR: &str = "script, style, noscript, template, link, meta";

// `~=` matches whole class tokens so "read-container" is not an ad slot.
const AD_SELECTOR: &str = concat!(
    "ins.adsbygoogle, [data-ad-slot], [data-ad-client], [data-ad-unit], ",
    "[id^=\"div-gpt-ad\"], [id^=\"google_ads\"], [id*=\"nitropay\"], [class*=\"nitropay\"], ",
    "[class~=\"ad\"], [class~=\"ads\"], [class~=\"ad-container\"], [class~=\"ad-slot\"], ",
    "[class~=\"advertisement\"], [class~=\"video-ad\"], [id*=\"video-ad\"], ",
    "[class*=\"vjs-ad\"], [class~=\"preroll\"], ",
    "iframe[src*=\"doubleclick.net\"], iframe[src*=\"googlesyndication.com\"]"
);

pub struct StripDisallowed;

impl Pass for StripDisallowed {
    fn name(&self) -> &'static str {
        "strip-disallowed"
    }

    fn run(&self, doc: &Document, _ctx: &PassContext<'_>) -> usize {
        let disallowed = doc.select(DISALLOWED_SELECTOR);
        let mut removed = disallowed.length();
        disallowed.remove();

        let ads = doc.select(AD_SELECTOR);
        removed += ads.length();
        ads.remove();

        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::test_support::run_pass;

    #[test]
    fn test_removes_scripts_and_styles() {
        let html = run_pass(
            &StripDisallowed,
            "<p>Keep</p><script>alert(1)</script><style>p{}</style><noscript>JS</noscript>",
        );
        assert_eq!(html, "<p>Keep</p>");
    }

    #[test]
    fn test_removes_ad_containers() {
        let html = run_pass(
            &StripDisallowed,
            concat!(
                r#"<ins class="adsbygoogle" data-ad-client="x"></ins>"#,
                r#"<div id="div-gpt-ad-123"><p>Ad</p></div>"#,
                r#"<div class="player video-ad"><p>Preroll</p></div>"#,
                r#"<iframe src="https://ad.doubleclick.net/x"></iframe>"#,
                "<p>Content</p>"
            ),
        );
        assert_eq!(html, "<p>Content</p>");
    }

    #[test]
    fn test_keeps_lookalike_classes() {
        let html = run_pass(
            &StripDisallowed,
            r#"<div class="read-container"><p>Guide</p></div>"#,
        );
        assert!(html.contains("Guide"));
    }
}
