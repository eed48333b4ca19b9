//! XML sitemap rendering.

use crate::chapter_ref::novel_path;
use crate::revalidation::BROWSE_PATH;
use crate::types::Timestamp;

/// One `<url>` entry of the sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: Option<Timestamp>,
    pub change_frequency: Option<&'static str>,
    pub priority: Option<f32>,
}

/// Build the full entry list: home, browse, then one entry per novel.
pub fn build_entries(base_url: &str, now: Timestamp, novels: &[(String, Timestamp)]) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');

    let mut entries = vec![
        SitemapEntry {
            loc: base.to_string(),
            last_modified: Some(now),
            change_frequency: Some("daily"),
            priority: Some(1.0),
        },
        SitemapEntry {
            loc: format!("{base}{BROWSE_PATH}"),
            last_modified: Some(now),
            change_frequency: Some("weekly"),
            priority: Some(0.8),
        },
    ];

    entries.extend(novels.iter().map(|(slug, updated_at)| SitemapEntry {
        loc: format!("{base}{}", novel_path(slug)),
        last_modified: Some(*updated_at),
        change_frequency: None,
        priority: None,
    }));

    entries
}

/// Render entries as a `urlset` document.
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
        if let Some(ts) = entry.last_modified {
            xml.push_str(&format!(
                "    <lastmod>{}</lastmod>\n",
                ts.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
            ));
        }
        if let Some(freq) = entry.change_frequency {
            xml.push_str(&format!("    <changefreq>{freq}</changefreq>\n"));
        }
        if let Some(priority) = entry.priority {
            xml.push_str(&format!("    <priority>{priority:.1}</priority>\n"));
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
