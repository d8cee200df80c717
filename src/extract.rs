//! Pulls part-of-speech and pronunciation pairs out of a Cambridge entry page.

use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};

use crate::sense::{Lookup, Sense};
use crate::{CdtError, Result};

static AMERICAN_TAB_SELECTOR: OnceLock<Result<Selector>> = OnceLock::new();
static BRITISH_TAB_SELECTOR: OnceLock<Result<Selector>> = OnceLock::new();
static ENTRY_BODY_SELECTOR: OnceLock<Result<Selector>> = OnceLock::new();
static POS_HEADER_SELECTOR: OnceLock<Result<Selector>> = OnceLock::new();
static POS_SELECTOR: OnceLock<Result<Selector>> = OnceLock::new();
static US_PRON_INFO_SELECTOR: OnceLock<Result<Selector>> = OnceLock::new();
static PRON_INFO_SELECTOR: OnceLock<Result<Selector>> = OnceLock::new();
static PRON_SELECTOR: OnceLock<Result<Selector>> = OnceLock::new();

fn cached_selector(
    cache: &'static OnceLock<Result<Selector>>,
    css: &'static str,
) -> Result<&'static Selector> {
    match cache.get_or_init(|| Selector::parse(css).map_err(|_| CdtError::ParseCssSelector(css))) {
        Ok(selector) => Ok(selector),
        Err(_) => Err(CdtError::ParseCssSelector(css)),
    }
}

fn element_text(element: ElementRef<'_>) -> Option<String> {
    let text = element.text().collect::<String>().trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Part-of-speech label of one `entry-body__el` region.
///
/// Returns `None` when the region has no `pos-header`, or the header has no
/// `pos` label; some entries (e.g. "taken") have no part of speech at all.
pub fn get_pos(entry: ElementRef<'_>) -> Result<Option<String>> {
    let header_selector = cached_selector(&POS_HEADER_SELECTOR, "div.pos-header")?;
    let pos_selector = cached_selector(&POS_SELECTOR, "span.pos")?;

    Ok(entry
        .select(header_selector)
        .next()
        .and_then(|header| header.select(pos_selector).next())
        .and_then(element_text))
}

/// Pronunciation of one `entry-body__el` region.
///
/// The `pron` span is only looked for inside a `pron-info` container, so the
/// transcriptions of irregular inflections listed further down the entry are
/// never picked up. A US-tagged container wins; otherwise the first untagged
/// one is used.
pub fn get_pron(entry: ElementRef<'_>) -> Result<Option<String>> {
    let us_info_selector =
        cached_selector(&US_PRON_INFO_SELECTOR, r#"span.pron-info[pron-region="US"]"#)?;
    let info_selector = cached_selector(&PRON_INFO_SELECTOR, "span.pron-info")?;
    let pron_selector = cached_selector(&PRON_SELECTOR, "span.pron")?;

    let pron_info = entry
        .select(us_info_selector)
        .next()
        .or_else(|| entry.select(info_selector).next());

    Ok(pron_info
        .and_then(|info| info.select(pron_selector).next())
        .and_then(element_text))
}

/// Extract every sense from a Cambridge entry page.
///
/// The American English tab is preferred, with the British tab as fallback.
/// A page with neither is [`Lookup::Unresolved`]. This function does not
/// perform network I/O.
///
/// # Examples
///
/// ```
/// use cdt::{parse_entry_page, Lookup, Sense};
///
/// let html = r#"
/// <div data-tab="ds-american-english">
///   <div class="entry-body__el">
///     <div class="pos-header">
///       <span class="pos">verb</span>
///       <span pron-region="US" class="pron-info">
///         <span class="pron">/<span class="ipa">hæv</span>/</span>
///       </span>
///     </div>
///   </div>
/// </div>
/// "#;
/// let lookup = parse_entry_page(html).unwrap();
/// assert_eq!(
///     lookup,
///     Lookup::Found(vec![Sense::new(Some("verb".into()), Some("/hæv/".into()))])
/// );
/// ```
pub fn parse_entry_page(html: &str) -> Result<Lookup> {
    let american_selector =
        cached_selector(&AMERICAN_TAB_SELECTOR, r#"div[data-tab="ds-american-english"]"#)?;
    let british_selector = cached_selector(&BRITISH_TAB_SELECTOR, r#"div[data-tab="ds-british"]"#)?;
    let entry_selector = cached_selector(&ENTRY_BODY_SELECTOR, "div.entry-body__el")?;

    let document = Html::parse_document(html);

    let tab = match document.select(american_selector).next() {
        Some(tab) => {
            tracing::debug!("using American English tab");
            tab
        }
        None => match document.select(british_selector).next() {
            Some(tab) => {
                tracing::debug!("American English tab missing, using British tab");
                tab
            }
            None => {
                tracing::debug!("no language tab on page");
                return Ok(Lookup::Unresolved);
            }
        },
    };

    let mut senses = Vec::new();
    for entry in tab.select(entry_selector) {
        senses.push(Sense::new(get_pos(entry)?, get_pron(entry)?));
    }
    tracing::debug!(entries = senses.len(), "extracted entry regions");

    Ok(Lookup::Found(senses))
}
