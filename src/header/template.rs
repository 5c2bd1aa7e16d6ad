const BORDER_WIDTH: usize = 79;

const COPYRIGHT: &str =
    "   Copyright 2017 - Rutherford Appleton Laboratory and University of Bristol";

const BODY: &str = r#"   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License."#;

const ADDENDUM: &str = "   Additional information about ipbus-firmware and the list of ipbus-firmware
   contacts are available at

       https://ipbus.web.cern.ch/ipbus";

/// The fixed license header text, plus its border and separator formatting.
///
/// Constructed once at startup and passed explicitly into the scan and
/// rewrite paths.
pub struct HeaderTemplate {
    copyright: String,
    body: String,
    addendum: String,
    border: String,
    section_break: String,
}

impl Default for HeaderTemplate {
    fn default() -> Self {
        Self {
            copyright: COPYRIGHT.to_string(),
            body: BODY.to_string(),
            addendum: ADDENDUM.to_string(),
            border: "-".repeat(BORDER_WIDTH),
            section_break: format!("{:^80}", "- - -").trim_end().to_string(),
        }
    }
}

impl HeaderTemplate {
    /// The copyright line; its trimmed form is what the presence check
    /// searches for.
    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// Render the header with every line carrying `line_prefix`.
    ///
    /// Rendering is pure: same prefix in, same text out. Block delimiters are
    /// not part of the rendered text; the rewrite step emits them on their
    /// own lines around it.
    pub fn render(&self, line_prefix: &str) -> String {
        let raw = [
            self.border.as_str(),
            self.copyright.as_str(),
            self.body.as_str(),
            self.section_break.as_str(),
            self.addendum.as_str(),
            self.border.as_str(),
        ]
        .join("\n\n");

        let mut text = String::new();
        for line in raw.lines() {
            text.push_str(line_prefix);
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    /// Number of lines in the canonical (unprefixed) rendering.
    ///
    /// Bounds the presence check: only this many leading lines of a file are
    /// ever scanned, regardless of comment style.
    pub fn line_count(&self) -> usize {
        self.render("").lines().count()
    }
}
