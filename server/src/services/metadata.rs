//! Crawler and agent metadata documents.
//!
//! DESIGN
//! ======
//! Each builder is a pure function of the site origin (and, for the sitemap,
//! a timestamp). Headers live with the route handlers; bodies live here so
//! they can be asserted byte for byte.

use time::OffsetDateTime;
use time::macros::format_description;

/// One sitemap entry relative to the site origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SitemapPage {
    pub path: &'static str,
    pub changefreq: &'static str,
    pub priority: &'static str,
}

/// Public pages advertised in `sitemap.xml`, in output order.
pub const SITEMAP_PAGES: [SitemapPage; 3] = [
    SitemapPage { path: "/", changefreq: "weekly", priority: "1.0" },
    SitemapPage { path: "/waitlist", changefreq: "monthly", priority: "0.8" },
    SitemapPage { path: "/privacy", changefreq: "yearly", priority: "0.3" },
];

/// `llms.txt`: LLM-readable product summary.
#[must_use]
pub fn llms_summary(origin: &str) -> String {
    format!(
        "Product: ThermaSim
Tagline: Simplify Heat Pump Design with Precision
One-liner: ThermaSim streamlines complex heat pump design calculations for HVAC professionals and engineers.
Audience: HVAC professionals, mechanical engineers, energy consultants
Key capabilities:
- 99% accurate simulations
- Cut design time by up to 50%
- Flexible refrigerants and parameter inputs
- Instant CoP and energy metrics
Primary CTA: Join the waitlist for early access
CTA URL: {origin}/waitlist
Secondary pages:
- Privacy Policy: {origin}/privacy
Brand tone: professional, precise, practical
Keywords: heat pump simulator, HVAC design, CoP, energy metrics, refrigerants, engineering, simulation
Notes: GDPR-compliant waitlist; email used only for ThermaSim updates
"
    )
}

/// `robots.txt`: allow everything, point at the sitemap.
#[must_use]
pub fn robots(origin: &str) -> String {
    format!("User-agent: *\nAllow: /\nSitemap: {origin}/sitemap.xml\n")
}

/// `sitemap.xml` with every page stamped with the same `lastmod`.
#[must_use]
pub fn sitemap(origin: &str, lastmod: OffsetDateTime) -> String {
    let lastmod = iso8601_millis(lastmod);
    let urls = SITEMAP_PAGES
        .iter()
        .map(|page| {
            format!(
                "<url>\n  <loc>{origin}{path}</loc>\n  <lastmod>{lastmod}</lastmod>\n  <changefreq>{cf}</changefreq>\n  <priority>{p}</priority>\n</url>",
                path = page.path,
                cf = page.changefreq,
                p = page.priority,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{urls}\n</urlset>\n"
    )
}

/// `YYYY-MM-DDTHH:MM:SS.mmmZ` in UTC.
#[must_use]
pub fn iso8601_millis(at: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");
    // An OffsetDateTime carries every component the description names.
    at.to_offset(time::UtcOffset::UTC).format(format).unwrap_or_default()
}

#[cfg(test)]
#[path = "metadata_test.rs"]
mod tests;
