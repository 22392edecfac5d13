//! AI interviewer: take an AI-driven interview from the terminal

use ai_interviewer::api::{HttpBackend, InterviewBackend};
use ai_interviewer::cli::{self, Cli, Commands, ConfigAction};
use ai_interviewer::config::Config;
use ai_interviewer::error::{InterviewError, Result};
use ai_interviewer::interview::source::candidate_request;
use ai_interviewer::interview::{AnswerInbox, InterviewEngine, TurnOutcome, END_COMMAND};
use ai_interviewer::output::formatter::ReportGenerator;
use ai_interviewer::output::view::ConsoleView;
use ai_interviewer::session::{bootstrap, Bootstrap, CompletionSummary, Session};
use ai_interviewer::storage::{FileStore, RecordStore, COMPLETION_KEY, SESSION_KEY};
use clap::Parser;
use log::{error, info};
use std::io::BufReader;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: PathBuf) -> Result<()> {
    let mut store = FileStore::new(&config.storage.state_dir);

    match command {
        Commands::Start {
            name,
            email,
            invitation_code,
            candidate_id,
        } => {
            let name = cli::validate_name(&name).map_err(InterviewError::InvalidInput)?;
            let email = cli::validate_email(&email).map_err(InterviewError::InvalidInput)?;

            let mut session = Session::new(name, email);
            session.candidate_id = candidate_id;
            session.invitation_code = cli::normalize_invitation_code(invitation_code);

            println!("🚀 正在开始面试...");
            let backend = HttpBackend::new(&config.api)?;
            let started = backend.start_interview(&candidate_request(&session)).await?;
            session.session_id = Some(started.session_id);

            store.remove(COMPLETION_KEY)?;
            store.set_json(SESSION_KEY, &session)?;
            info!("Stored interview session for {}", session.candidate_name);

            println!("✅ 面试会话已创建: {}", session.candidate_name);
            println!("💡 运行 `ai-interviewer interview` 开始答题");
        }

        Commands::Interview => {
            let session = match bootstrap(&mut store)? {
                Bootstrap::Ready(session) => session,
                Bootstrap::RedirectToEntry => {
                    println!("⚠️  未找到面试会话，请先运行 `ai-interviewer start`");
                    return Ok(());
                }
            };

            let backend = HttpBackend::new(&config.api)?;
            let view = ConsoleView::new(config.output.color_output);
            let mut engine = InterviewEngine::new(session, backend, store, view, config.interview.clone());
            run_interview(&mut engine).await?;
        }

        Commands::Complete { output, save } => {
            let format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(InterviewError::InvalidInput)?,
                None => config.output.format,
            };

            let summary: Option<CompletionSummary> = store.get_json(COMPLETION_KEY)?;
            let summary = match summary {
                Some(summary) => summary,
                None => {
                    println!("候选人: 候选人");
                    println!("面试时长: 未知");
                    println!("回答问题数: 0 题");
                    return Ok(());
                }
            };

            let generator = ReportGenerator::new(config.output.color_output);
            let report = generator.generate_report(&summary, &format)?;
            println!("{}", report);

            if let Some(path) = save {
                let path = if path.is_dir() {
                    path.join(ReportGenerator::default_file_name(&summary, &format))
                } else {
                    path
                };
                // saved files never carry terminal colors
                let plain = ReportGenerator::new(false).generate_report(&summary, &format)?;
                std::fs::write(&path, plain)?;
                println!("✅ 报告已保存: {}", path.display());
            }
        }

        Commands::Reset => {
            store.remove(SESSION_KEY)?;
            store.remove(COMPLETION_KEY)?;
            println!("🔄 已清除面试会话和完成记录");
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("API Base URL: {}", config.api.base_url);
                println!("Request Timeout: {}s", config.api.timeout_secs);
                println!("State Directory: {}", config.storage.state_dir.display());
                println!("\nInterview:");
                println!("  Follow-up threshold: {}", config.interview.follow_up_threshold);
                println!("  Welcome delay: {}ms", config.interview.welcome_delay_ms);
                println!("  Advance delay: {}ms", config.interview.advance_delay_ms);
                println!("  Completion delay: {}ms", config.interview.completion_delay_ms);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(&config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                let mut config = config;
                config.set_value(&key, &value)?;
                config.save_to(&config_path)?;
                println!("✅ {} = {}", key, value);
            }
        },
    }

    Ok(())
}

async fn run_interview<B, S>(engine: &mut InterviewEngine<B, S, ConsoleView>) -> Result<()>
where
    B: InterviewBackend,
    S: RecordStore,
{
    let mut inbox = AnswerInbox::spawn_reader(BufReader::new(std::io::stdin()));

    if let TurnOutcome::Finished(_) = engine.begin().await? {
        return Ok(());
    }
    println!("💡 输入回答后按回车发送，输入 {} 结束面试", END_COMMAND);

    engine.run(&mut inbox).await?;
    Ok(())
}
