use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    sections: Vec<(String, Vec<(String, String)>)>,
    warnings: Vec<String>,
    next_step: Option<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, true)
    }

    pub fn partial(title: impl Into<String>) -> Self {
        Self::new(title, false)
    }

    fn new(title: impl Into<String>, success: bool) -> Self {
        Self {
            title: title.into(),
            success,
            sections: Vec::new(),
            warnings: Vec::new(),
            next_step: None,
        }
    }

    /// Add a titled block of `label  value` rows
    pub fn add_section(&mut self, heading: impl Into<String>, rows: Vec<(String, String)>) {
        if !rows.is_empty() {
            self.sections.push((heading.into(), rows));
        }
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (icon, title) = if self.success {
            (
                Icon::Success,
                ColoredText::success(self.title.as_str()).bold(),
            )
        } else {
            (
                Icon::Warning,
                ColoredText::warning(self.title.as_str()).bold(),
            )
        };

        let mut out = format!(
            "\n{} {}\n",
            icon.colored(supports_color, supports_unicode),
            title.render(supports_color)
        );

        for (heading, rows) in &self.sections {
            out.push('\n');
            out.push_str(&ColoredText::plain(heading.as_str()).bold().render(supports_color));
            out.push('\n');
            let width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
            for (label, value) in rows {
                let padded = format!("{:<width$}", label, width = width);
                out.push_str(&format!(
                    "  {}  {}\n",
                    ColoredText::dim(padded).render(supports_color),
                    value
                ));
            }
        }

        if !self.warnings.is_empty() {
            out.push('\n');
            for warning in &self.warnings {
                out.push_str(&format!(
                    "{} {}\n",
                    Icon::Warning.colored(supports_color, supports_unicode),
                    warning
                ));
            }
        }

        if let Some(next_step) = &self.next_step {
            out.push_str(&format!(
                "\n{} {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }

        out
    }
}
