// src/ports/html.rs
use crate::constants::ACTIVE_TAB_COOKIE;
use crate::domain::Tab;
use html_escape::encode_text;
use tracing::instrument;

// Cookie helpers are duplicated into every generated document (independent of
// anything the host application does) so the output stays fully standalone.
const COOKIE_FNS: &str = r#"
function setCookie(n,v,d){var e=new Date(Date.now()+d*864e5).toUTCString();document.cookie=encodeURIComponent(n)+"="+encodeURIComponent(v)+"; Path=/; Expires="+e+"; SameSite=Lax";}
function getCookie(n){return document.cookie.split("; ").reduce(function(r,v){var p=v.split("=");return p[0]===encodeURIComponent(n)?decodeURIComponent(p.slice(1).join("=")):r},null);}
"#;

/// Builds one standalone HTML document from a title and an ordered tab list.
///
/// The output uses inline styles and one inline script only; it references no
/// external asset and opens as a plain file. Tab *titles* are HTML-escaped,
/// tab *content* is inserted verbatim: authors may embed arbitrary HTML/JS in
/// tab bodies, which is the point of the generator.
#[derive(Debug)]
pub struct TabDocumentBuilder;

impl TabDocumentBuilder {
    pub fn new() -> Self {
        Self
    }

    #[instrument(level = "debug", skip(self, tabs), fields(tab_count = tabs.len()))]
    pub fn render(&self, title: &str, tabs: &[Tab]) -> String {
        let buttons = tabs
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let selected = i == 0;
                format!(
                    r#"<button role="tab" id="tab-{i}" aria-controls="panel-{i}" aria-selected="{selected}"
style="padding:8px 12px;border:1px solid #ccc;border-radius:8px;margin-right:6px;background:{bg};color:{fg};cursor:pointer;"
onclick="selectTab({i})">{label}</button>"#,
                    bg = if selected { "#2563eb" } else { "#f5f5f5" },
                    fg = if selected { "#fff" } else { "#111" },
                    label = encode_text(&t.title),
                )
            })
            .collect::<Vec<_>>()
            .join("");

        let panels = tabs
            .iter()
            .enumerate()
            .map(|(i, t)| {
                format!(
                    r#"<div role="tabpanel" id="panel-{i}" aria-labelledby="tab-{i}"
style="display:{display};border:1px solid #ddd;border-radius:12px;padding:12px;margin-top:10px;">
{content}
</div>"#,
                    display = if i == 0 { "block" } else { "none" },
                    content = t.content,
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let script = self.tab_script();
        let title = encode_text(title);

        format!(
            r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<meta name="viewport" content="width=device-width,initial-scale=1">
</head>
<body style="font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial; line-height:1.5; color:#111; background:#fff; padding:16px;">
  <h1 style="margin-top:0;">{title}</h1>
  <div role="tablist" aria-label="Tab list" style="margin-bottom:6px;">
    {buttons}
  </div>
  {panels}
<script>
{script}
</script>
</body>
</html>"#
        )
    }

    /// Inline script: tab switching plus last-selected-tab persistence in a
    /// cookie scoped to the generated document itself.
    fn tab_script(&self) -> String {
        format!(
            r#"{COOKIE_FNS}
function selectTab(idx){{
  var tabs=document.querySelectorAll('[role="tab"]');
  var panels=document.querySelectorAll('[role="tabpanel"]');
  for(var i=0;i<tabs.length;i++){{
    var active = i===idx;
    tabs[i].setAttribute('aria-selected', active ? 'true':'false');
    tabs[i].style.background = active ? '#2563eb' : '#f5f5f5';
    tabs[i].style.color = active ? '#fff' : '#111';
    panels[i].style.display = active ? 'block' : 'none';
  }}
  setCookie('{ACTIVE_TAB_COOKIE}', String(idx), 30);
}}
window.addEventListener('DOMContentLoaded', function(){{
  var c = getCookie('{ACTIVE_TAB_COOKIE}');
  if(c){{ var i = parseInt(c,10); if(!isNaN(i)) selectTab(i); }}
}});
"#
        )
    }
}

impl Default for TabDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
