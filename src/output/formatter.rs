//! Completion report formatters

use crate::config::OutputFormat;
use crate::error::Result;
use crate::session::CompletionSummary;
use askama::Template;
use colored::{Color, Colorize};

/// Trait for formatting the summary of a finished interview
pub trait OutputFormatter {
    fn format_summary(&self, summary: &CompletionSummary) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

pub struct ConsoleFormatter {
    use_colors: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter;

/// Plain-text report, the downloadable one
pub struct TextFormatter;

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    text_formatter: TextFormatter,
}

#[derive(Template)]
#[template(source = r#"AI面试报告
==========================================

候选人信息：
姓名：{{ candidate_name }}
邮箱：{{ candidate_email }}
面试时间：{{ report_date }}

面试统计：
面试时长：{{ duration }}
回答问题数：{{ questions_answered }} / {{ total_questions }} 题
面试状态：已完成
综合得分：{{ total_score }}

维度得分：
{{ dimension_lines }}

后续流程：
1. AI系统正在分析回答内容
2. HR团队将在2-3个工作日内审核
3. 结果将通过邮件通知候选人
4. 如需进一步面试，将及时联系

报告生成时间：{{ generated_at }}
=========================================="#, ext = "txt")]
struct TextReportTemplate {
    candidate_name: String,
    candidate_email: String,
    report_date: String,
    duration: String,
    questions_answered: usize,
    total_questions: usize,
    total_score: u32,
    dimension_lines: String,
    generated_at: String,
}

fn dimension_lines(summary: &CompletionSummary, bullet: &str) -> Vec<String> {
    if summary.dimension_scores.is_empty() {
        return vec![format!("{}暂无评分", bullet)];
    }
    summary
        .dimension_scores
        .iter()
        .map(|(dimension, score)| format!("{}{}（{}）：{}", bullet, dimension.label(), dimension, score))
        .collect()
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_score_badge(&self, score: u32) -> String {
        let (badge, color) = match score {
            90..=100 => ("优秀", Color::Green),
            80..=89 => ("良好", Color::BrightGreen),
            70..=79 => ("中等", Color::Yellow),
            60..=69 => ("及格", Color::BrightYellow),
            _ => ("待提升", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_summary(&self, summary: &CompletionSummary) -> Result<String> {
        let mut out = String::new();
        out.push_str(&format!("\n{}\n\n", self.colorize("█ 面试完成", Color::Blue)));
        out.push_str(&format!("  候选人: {}\n", summary.candidate_name));
        out.push_str(&format!("  面试时长: {}\n", summary.duration_text()));
        out.push_str(&format!(
            "  回答问题数: {} / {} 题\n",
            summary.questions_answered, summary.total_questions
        ));
        out.push_str(&format!(
            "  综合得分: {} {}\n",
            summary.total_score,
            self.format_score_badge(summary.total_score)
        ));
        out.push_str(&format!("\n{}\n", self.colorize("▓ 维度得分", Color::Green)));
        for line in dimension_lines(summary, "  • ") {
            out.push_str(&line);
            out.push('\n');
        }
        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_summary(&self, summary: &CompletionSummary) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(summary)?)
        } else {
            Ok(serde_json::to_string(summary)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_summary(&self, summary: &CompletionSummary) -> Result<String> {
        let mut md = String::new();
        md.push_str("# AI面试报告\n\n");
        md.push_str("## 候选人信息\n\n");
        md.push_str(&format!("- **姓名**: {}\n", summary.candidate_name));
        md.push_str(&format!("- **邮箱**: {}\n", summary.candidate_email));
        if let Some(session_id) = &summary.session_id {
            md.push_str(&format!("- **会话**: `{}`\n", session_id));
        }
        md.push_str("\n## 面试统计\n\n");
        md.push_str(&format!("- **面试时长**: {}\n", summary.duration_text()));
        md.push_str(&format!(
            "- **回答问题数**: {} / {}\n",
            summary.questions_answered, summary.total_questions
        ));
        md.push_str(&format!("- **综合得分**: {}\n", summary.total_score));
        md.push_str("\n## 维度得分\n\n");
        if summary.dimension_scores.is_empty() {
            md.push_str("暂无评分\n");
        } else {
            md.push_str("| 维度 | 得分 |\n|------|------|\n");
            for (dimension, score) in &summary.dimension_scores {
                md.push_str(&format!("| {} ({}) | {} |\n", dimension.label(), dimension, score));
            }
        }
        Ok(md)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl OutputFormatter for TextFormatter {
    fn format_summary(&self, summary: &CompletionSummary) -> Result<String> {
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let template = TextReportTemplate {
            candidate_name: summary.candidate_name.clone(),
            candidate_email: summary.candidate_email.clone(),
            report_date: summary
                .start_time
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            duration: summary.duration_text(),
            questions_answered: summary.questions_answered,
            total_questions: summary.total_questions,
            total_score: summary.total_score,
            dimension_lines: dimension_lines(summary, "- ").join("\n"),
            generated_at: now,
        };
        Ok(template.render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter,
            text_formatter: TextFormatter,
        }
    }

    pub fn generate_report(&self, summary: &CompletionSummary, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_summary(summary),
            OutputFormat::Json => self.json_formatter.format_summary(summary),
            OutputFormat::Markdown => self.markdown_formatter.format_summary(summary),
            OutputFormat::Text => self.text_formatter.format_summary(summary),
        }
    }

    /// File name the report is saved under when no path is given
    pub fn default_file_name(summary: &CompletionSummary, format: &OutputFormat) -> String {
        let ext = match format {
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
            OutputFormat::Console | OutputFormat::Text => "txt",
        };
        format!(
            "面试报告_{}_{}.{}",
            summary.candidate_name,
            summary.end_time.with_timezone(&chrono::Local).format("%Y-%m-%d"),
            ext
        )
    }
}
