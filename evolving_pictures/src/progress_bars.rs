#[cfg(feature = "progress")]
mod imp {
    use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
    use std::io::IsTerminal;

    /// Bar over the pictures of one generation. Safe to tick from rayon workers.
    pub(crate) struct RenderProgress {
        show: bool,
        bar: ProgressBar,
    }

    impl RenderProgress {
        pub(crate) fn new(total: usize, enabled: bool) -> Self {
            let show = enabled && std::io::stderr().is_terminal();
            let bar = if show {
                let pb = ProgressBar::new(total as u64);
                pb.set_draw_target(ProgressDrawTarget::stderr_with_hz(10));
                pb.set_prefix("Rendering");
                let style = ProgressStyle::with_template("{prefix} {wide_bar} {pos:>3}/{len:3} [{elapsed_precise}]")
                    .unwrap_or_else(|_| ProgressStyle::default_bar());
                pb.set_style(style);
                pb
            } else {
                ProgressBar::hidden()
            };
            Self { show, bar }
        }

        pub(crate) fn on_picture_done(&self) {
            if self.show {
                self.bar.inc(1);
            }
        }

        pub(crate) fn finish(&self) {
            if self.show {
                self.bar.finish_and_clear();
            }
        }
    }

}

#[cfg(not(feature = "progress"))]
mod imp {
    pub(crate) struct RenderProgress;

    impl RenderProgress {
        pub(crate) fn new(_total: usize, _enabled: bool) -> Self {
            Self
        }

        pub(crate) fn on_picture_done(&self) {}

        pub(crate) fn finish(&self) {}
    }
}

pub(crate) use imp::RenderProgress;
