pub use indicatif::ProgressBar;
pub use indicatif::ProgressStyle;

pub fn bar(size: usize, prefix: &str) -> ProgressBar {
    let template = format!("{}{}", prefix, "{wide_bar} [{elapsed} elapsed; {eta} left]");

    let progress = ProgressBar::new(size as u64);
    progress.set_style(ProgressStyle::default_bar().template(&template));

    progress
}
