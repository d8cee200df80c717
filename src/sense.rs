//! Extracted values for one entry region and their rendering into output lines.

/// Placeholder for an entry that carries no part-of-speech label.
pub const NO_POS: &str = "NO-POS";
/// Placeholder for an entry that carries no pronunciation.
pub const NO_PRON: &str = "NO-PRON";
/// Single output line for a word that could not be resolved at all.
pub const UNRESOLVED: &str = "None:None";

/// Part of speech and pronunciation found in one entry region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sense {
    pub pos: Option<String>,
    pub pron: Option<String>,
}

impl Sense {
    pub fn new(pos: Option<String>, pron: Option<String>) -> Self {
        Self { pos, pron }
    }

    pub fn pos_or_sentinel(&self) -> &str {
        self.pos.as_deref().unwrap_or(NO_POS)
    }

    pub fn pron_or_sentinel(&self) -> &str {
        self.pron.as_deref().unwrap_or(NO_PRON)
    }

    /// `"<pos>:<pron>"`, with sentinels in place of missing values.
    pub fn joined(&self) -> String {
        format!("{}:{}", self.pos_or_sentinel(), self.pron_or_sentinel())
    }
}

/// Outcome of looking up one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// 404, spell-check redirect, or no language tab on the page.
    Unresolved,
    /// One sense per entry region, in document order.
    Found(Vec<Sense>),
}

impl Lookup {
    /// Render the lookup into output lines.
    ///
    /// With `need_pos`, every sense becomes one `"pos:pron"` line, duplicates
    /// included. Without it, only pronunciations are kept and repeated ones are
    /// dropped, preserving first occurrence. An unresolved word always renders
    /// as `["None:None"]`.
    pub fn into_lines(self, need_pos: bool) -> Vec<String> {
        let senses = match self {
            Self::Unresolved => return vec![UNRESOLVED.to_string()],
            Self::Found(senses) => senses,
        };

        if need_pos {
            return senses.iter().map(Sense::joined).collect();
        }

        let mut lines: Vec<String> = Vec::with_capacity(senses.len());
        for sense in &senses {
            let pron = sense.pron_or_sentinel();
            if !lines.iter().any(|seen| seen == pron) {
                lines.push(pron.to_string());
            }
        }
        lines
    }
}
