// ABOUTME: Configuration options for the sanitizer including token lists, size caps, and id policy.
// ABOUTME: OptionsBuilder provides a fluent API; Options also deserializes from partial JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SanitizeError;

/// How heading ids that slugify to the same value are disambiguated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdCollisionPolicy {
    /// Append `-2`, `-3`, ... to repeated slugs in document order.
    #[default]
    Suffix,
    /// Leave duplicate ids as they are.
    Keep,
}

impl fmt::Display for IdCollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IdCollisionPolicy::Suffix => "suffix",
            IdCollisionPolicy::Keep => "keep",
        };
        write!(f, "{}", s)
    }
}

impl From<&str> for IdCollisionPolicy {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "keep" | "none" => IdCollisionPolicy::Keep,
            _ => IdCollisionPolicy::Suffix,
        }
    }
}

/// Tunables for every rewrite pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Competitor brand tokens; matching content is removed.
    pub brand_tokens: Vec<String>,
    /// Blocks mentioning a brand are removed only below this many characters.
    pub brand_block_max_chars: usize,
    /// League/version tokens whose short mentions count as meta noise.
    pub league_tokens: Vec<String>,
    pub league_block_max_chars: usize,
    pub last_updated_max_chars: usize,
    /// How many siblings after the first heading the byline scan inspects.
    pub meta_scan_siblings: usize,
    pub meta_block_max_chars: usize,
    /// Heading prefixes whose whole section is dropped.
    pub section_prefixes: Vec<String>,
    /// Short lines matching one of these become headings regardless of case.
    pub promote_keywords: Vec<String>,
    pub promote_max_words: usize,
    pub long_paragraph_chars: usize,
    pub paragraph_chunk_chars: usize,
    pub paragraph_chunk_sentences: usize,
    pub default_image_width: u32,
    pub default_image_height: u32,
    /// Hosts (and their subdomains) treated as video embeds.
    pub video_hosts: Vec<String>,
    /// The highest heading level the fragment may contain after demotion.
    pub top_heading_level: u8,
    pub id_collision: IdCollisionPolicy,
    /// Run the serialized output through the tag/attribute safelist.
    pub enforce_safelist: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            brand_tokens: strings(&["maxroll"]),
            brand_block_max_chars: 1200,
            league_tokens: strings(&["3.27"]),
            league_block_max_chars: 160,
            last_updated_max_chars: 120,
            meta_scan_siblings: 8,
            meta_block_max_chars: 80,
            section_prefixes: strings(&["credits", "changelog", "related posts"]),
            promote_keywords: strings(&[
                "early game",
                "endgame",
                "end game",
                "mid game",
                "late game",
                "leveling",
                "resistances",
                "video",
                "summary",
                "gear",
                "gems",
                "flasks",
                "passive tree",
                "ascendancy",
                "pantheon",
                "bandits",
            ]),
            promote_max_words: 5,
            long_paragraph_chars: 500,
            paragraph_chunk_chars: 220,
            paragraph_chunk_sentences: 3,
            default_image_width: 800,
            default_image_height: 450,
            video_hosts: strings(&[
                "youtube.com",
                "youtube-nocookie.com",
                "youtu.be",
                "vimeo.com",
                "player.twitch.tv",
                "clips.twitch.tv",
                "streamable.com",
                "dailymotion.com",
            ]),
            top_heading_level: 2,
            id_collision: IdCollisionPolicy::Suffix,
            enforce_safelist: true,
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Options {
    /// Create an OptionsBuilder starting from the defaults.
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::new()
    }

    /// Parse options from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SanitizeError> {
        let options: Options = serde_json::from_str(json).map_err(SanitizeError::config)?;
        options.validate()?;
        Ok(options)
    }

    /// Check ranges that would make a pass misbehave.
    pub fn validate(&self) -> Result<(), SanitizeError> {
        if !(1..=6).contains(&self.top_heading_level) {
            return Err(SanitizeError::invalid_options(format!(
                "top_heading_level must be between 1 and 6, got {}",
                self.top_heading_level
            )));
        }
        if self.paragraph_chunk_sentences == 0 {
            return Err(SanitizeError::invalid_options(
                "paragraph_chunk_sentences must be at least 1",
            ));
        }
        if self.promote_max_words == 0 {
            return Err(SanitizeError::invalid_options(
                "promote_max_words must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Builder for constructing Options with custom settings.
#[derive(Debug, Clone)]
pub struct OptionsBuilder {
    opts: Options,
}

impl OptionsBuilder {
    /// Create a new OptionsBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Replace the competitor brand tokens.
    pub fn brand_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opts.brand_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the league/version tokens.
    pub fn league_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opts.league_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the heading prefixes whose sections are dropped.
    pub fn section_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opts.section_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Add a keyword that promotes a short line to a heading.
    pub fn promote_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.opts.promote_keywords.push(keyword.into());
        self
    }

    /// Add a video host.
    pub fn video_host(mut self, host: impl Into<String>) -> Self {
        self.opts.video_hosts.push(host.into());
        self
    }

    /// Set the size cap for brand-mentioning blocks.
    pub fn brand_block_max_chars(mut self, max: usize) -> Self {
        self.opts.brand_block_max_chars = max;
        self
    }

    /// Set the character count above which paragraphs are split.
    pub fn long_paragraph_chars(mut self, chars: usize) -> Self {
        self.opts.long_paragraph_chars = chars;
        self
    }

    /// Set the default dimensions given to images without width/height.
    pub fn default_image_size(mut self, width: u32, height: u32) -> Self {
        self.opts.default_image_width = width;
        self.opts.default_image_height = height;
        self
    }

    /// Set the highest heading level allowed in output.
    pub fn top_heading_level(mut self, level: u8) -> Self {
        self.opts.top_heading_level = level;
        self
    }

    /// Set the heading id collision policy.
    pub fn id_collision(mut self, policy: IdCollisionPolicy) -> Self {
        self.opts.id_collision = policy;
        self
    }

    /// Enable or disable the final safelist filter.
    pub fn enforce_safelist(mut self, enforce: bool) -> Self {
        self.opts.enforce_safelist = enforce;
        self
    }

    /// Build the Options.
    pub fn build(self) -> Options {
        self.opts
    }
}

impl Default for OptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
