use crate::block::{Line, ListKind, OpenBlock};
use crate::config::Config;
use crate::inline::format_inline;
use crate::parser::{MAX_HEADING_LEVEL, classify};

/// Line-by-line Markdown to HTML converter.
///
/// Output lines are appended to a caller-owned buffer, each terminated by
/// `\n`. At most one block is open at a time; any line that does not
/// continue it closes it first.
pub struct Converter<'c> {
    config: &'c Config,
    open: OpenBlock,
}

impl<'c> Converter<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self {
            config,
            open: OpenBlock::None,
        }
    }

    /// Convert one raw input line.
    pub fn push_line(&mut self, raw: &str, out: &mut Vec<String>) {
        match classify(raw) {
            Line::Heading {
                level,
                content,
                raw: line,
            } => {
                self.close(out);
                if level > MAX_HEADING_LEVEL {
                    log::debug!("heading run of {level} exceeds h{MAX_HEADING_LEVEL}, passing through");
                    out.push(format!("{line}\n"));
                } else {
                    out.push(format!("<h{level}>{content}</h{level}>\n"));
                }
            }
            Line::UnorderedItem(content) => self.list_item(ListKind::Unordered, content, out),
            Line::OrderedItem(content) => self.list_item(ListKind::Ordered, content, out),
            Line::Text(text) => self.paragraph_line(text, out),
            Line::Blank => self.close(out),
        }
    }

    /// Close whatever block is still open at end of input.
    pub fn finish(mut self, out: &mut Vec<String>) {
        self.close(out);
    }

    fn list_item(&mut self, kind: ListKind, content: &str, out: &mut Vec<String>) {
        if self.open != OpenBlock::List(kind) {
            self.close(out);
            log::debug!("opening <{}>", kind.tag());
            out.push(format!("<{}>\n", kind.tag()));
            self.open = OpenBlock::List(kind);
        }
        out.push(format!(
            "<li>{}</li>\n",
            format_inline(content, &self.config.inline)
        ));
    }

    fn paragraph_line(&mut self, text: &str, out: &mut Vec<String>) {
        if self.open == OpenBlock::Paragraph {
            out.push(format!("{}\n", self.config.paragraph.line_break));
        } else {
            self.close(out);
            log::debug!("opening <p>");
            out.push("<p>\n".to_string());
            self.open = OpenBlock::Paragraph;
        }
        out.push(format!("{}\n", format_inline(text, &self.config.inline)));
    }

    fn close(&mut self, out: &mut Vec<String>) {
        match std::mem::take(&mut self.open) {
            OpenBlock::None => {}
            OpenBlock::Paragraph => {
                log::debug!("closing <p>");
                out.push("</p>\n".to_string());
            }
            OpenBlock::List(kind) => {
                log::debug!("closing <{}>", kind.tag());
                out.push(format!("</{}>\n", kind.tag()));
            }
        }
    }
}

/// Convert a sequence of raw lines into newline-terminated HTML lines.
pub fn convert_lines<I, S>(lines: I, config: &Config) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Vec::new();
    let mut converter = Converter::new(config);
    for line in lines {
        converter.push_line(line.as_ref(), &mut out);
    }
    converter.finish(&mut out);
    out
}
