//! Chat-style presentation of a running interview

use crate::interview::engine::EngineState;
use crate::interview::input::END_COMMAND;
use crate::interview::progress::Progress;
use crate::session::{CompletionSummary, Session};
use colored::{Color, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Interviewer,
    Candidate,
}

/// Receives everything the engine wants shown. Implementations only render.
pub trait InterviewView {
    fn show_candidate(&mut self, session: &Session);
    fn message(&mut self, speaker: Speaker, text: &str);
    fn progress(&mut self, progress: Progress);
    /// The interviewer is "thinking" while an answer is being scored
    fn typing(&mut self, active: bool);
    fn input_enabled(&mut self, enabled: bool);
    /// Ask whether the candidate really wants to stop after typing the end command
    fn confirm_end(&mut self);
    fn state_changed(&mut self, state: EngineState);
    fn completed(&mut self, summary: &CompletionSummary);
}

pub struct ConsoleView {
    use_colors: bool,
    bar: Option<ProgressBar>,
    spinner: Option<ProgressBar>,
}

impl ConsoleView {
    pub fn new(use_colors: bool) -> Self {
        Self {
            use_colors,
            bar: None,
            spinner: None,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Print above any live progress bar
    fn emit(&self, line: &str) {
        match &self.bar {
            Some(bar) => bar.suspend(|| println!("{}", line)),
            None => println!("{}", line),
        }
    }
}

impl InterviewView for ConsoleView {
    fn show_candidate(&mut self, session: &Session) {
        let position = session.candidate_position.as_deref().unwrap_or("未分配岗位");
        let header = format!("候选人: {} | 应聘岗位: {}", session.candidate_name, position);
        let header = if self.use_colors {
            header.bold().to_string()
        } else {
            header
        };
        self.emit(&header);
    }

    fn message(&mut self, speaker: Speaker, text: &str) {
        let time = chrono::Local::now().format("%H:%M");
        let line = match speaker {
            Speaker::Interviewer => format!("{} {}", self.colorize("AI面试官 ▸", Color::Cyan), text),
            Speaker::Candidate => format!("{} {}", self.colorize("您 ▸", Color::Green), text),
        };
        self.emit(&format!("{}  {}", line, self.colorize(&time.to_string(), Color::BrightBlack)));
    }

    fn progress(&mut self, progress: Progress) {
        let bar = self.bar.get_or_insert_with(|| {
            let bar = ProgressBar::new(progress.total as u64);
            let style = ProgressStyle::with_template("问题 {pos}/{len} [{bar:30.cyan/blue}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar());
            bar.set_style(style);
            bar
        });
        bar.set_length(progress.total as u64);
        bar.set_position(progress.display_current() as u64);
        bar.set_message(format!("{:.0}%", progress.percentage()));
    }

    fn typing(&mut self, active: bool) {
        if active {
            let spinner = ProgressBar::new_spinner();
            spinner.set_message("AI面试官正在分析您的回答...");
            spinner.enable_steady_tick(Duration::from_millis(120));
            self.spinner = Some(spinner);
        } else if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn input_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.emit(&self.colorize("[回答输入已关闭]", Color::BrightBlack));
        }
    }

    fn confirm_end(&mut self) {
        self.emit(&format!(
            "{} 确定要结束面试吗？结束后将无法继续回答问题。确认结束 (y/N)",
            self.colorize(END_COMMAND, Color::Yellow)
        ));
    }

    fn state_changed(&mut self, state: EngineState) {
        debug!("Interview state: {:?}", state);
    }

    fn completed(&mut self, summary: &CompletionSummary) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
        println!(
            "\n{} 共回答 {} 题，用时 {}",
            self.colorize("✅ 面试完成!", Color::Green),
            summary.questions_answered,
            summary.duration_text()
        );
        println!("💡 运行 `ai-interviewer complete` 查看面试报告");
    }
}
