use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// How many records pass between progress updates.
pub(crate) const PROGRESS_INTERVAL: u64 = 1000;

pub(crate) struct ProgressBarBuilder {
    style_template: &'static str,
    message: String,
    tick: Option<Duration>,
}

impl ProgressBarBuilder {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            style_template: "{spinner:.green} [{elapsed_precise}] {msg}: {pos} records",
            message: message.into(),
            tick: None,
        }
    }

    pub(crate) fn with_template(mut self, template: &'static str) -> Self {
        self.style_template = template;
        self
    }

    pub(crate) fn with_tick(mut self, interval: Duration) -> Self {
        self.tick = Some(interval);
        self
    }

    pub(crate) fn build(self) -> Result<ProgressBar> {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template(self.style_template)?);
        pb.set_message(self.message);

        if let Some(interval) = self.tick {
            pb.enable_steady_tick(interval);
        }

        Ok(pb)
    }
}

/// Passes `items` through unchanged, moving `pb` forward every
/// [`PROGRESS_INTERVAL`] items.
pub(crate) fn track<'a, I>(items: I, pb: &'a ProgressBar) -> impl Iterator<Item = I::Item> + 'a
where
    I: Iterator + 'a,
{
    let mut seen = 0u64;
    items.inspect(move |_| {
        seen += 1;
        if seen % PROGRESS_INTERVAL == 0 {
            pb.set_position(seen);
        }
    })
}
