use clap::Parser;
use saju_core::config::cli::{AdminCommand, Cli, Command, TableFormat};
use saju_core::core::compatibility::asymmetric_pairs;
use saju_core::core::signs::table_csv;
use saju_core::domain::model::AdminSettings;
use saju_core::utils::error::{ErrorSeverity, Result};
use saju_core::utils::{logger, validation};
use saju_core::utils::validation::Validate;
use saju_core::{
    calculate_zodiac, calculate_zodiac_from_birth, calculate_zodiac_from_date,
    check_compatibility, sign, signs, AppContext, TomlConfig, ZodiacId,
};
use serde::Serialize;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.json_logs() {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }
    tracing::debug!("CLI args: {:?}", cli);

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn load_config(cli: &Cli) -> Result<TomlConfig> {
    let config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    let config = config
        .with_api_base_url(cli.api_url.clone())
        .with_ws_url(cli.ws_url.clone());
    config.validate()?;
    Ok(config)
}

async fn run(command: Command, config: &TomlConfig) -> Result<()> {
    match command {
        Command::Zodiac {
            year,
            month,
            day,
            any_year,
        } => {
            let id = resolve_zodiac(year, month, day, any_year)?;
            let s = sign(id);
            println!(
                "{} ({}, {} {}) - {}",
                s.name,
                s.name_ko,
                s.element,
                s.element.name_ko(),
                s.id
            );
        }
        Command::Sign { id } => {
            print_json(sign(ZodiacId::parse_lenient(&id)?))?;
        }
        Command::Table { format } => match format {
            TableFormat::Json => print_json(&signs())?,
            TableFormat::Csv => print!("{}", table_csv(signs())?),
        },
        Command::Compat { first, second } => {
            let result = check_compatibility(&first, &second);
            println!("{} -> {}: {}", first, second, result);
        }
        Command::Audit => {
            let pairs = asymmetric_pairs();
            if pairs.is_empty() {
                println!("All compatibility entries agree in both directions");
            }
            for p in pairs {
                println!("{} -> {}: {} | {} -> {}: {}", p.a, p.b, p.forward, p.b, p.a, p.backward);
            }
        }
        Command::Admin(admin) => {
            let ctx = AppContext::from_config(config)?;
            run_admin(admin, &ctx).await?;
        }
        Command::Monitor { max_messages } => {
            let ctx = AppContext::from_config(config)?;
            run_monitor(&ctx, max_messages).await?;
        }
    }
    Ok(())
}

fn resolve_zodiac(year: i32, month: Option<u32>, day: Option<u32>, any_year: bool) -> Result<ZodiacId> {
    if !any_year {
        validation::validate_birth_year(year)?;
    }
    let id = match (month, day) {
        // outside chrono's calendar range only month and day can be checked
        (Some(month), Some(day)) if any_year => {
            validation::validate_month_day(month, day)?;
            calculate_zodiac_from_birth(year, month, day)
        }
        (Some(month), Some(day)) => {
            let date = validation::validate_birth_date(year, month, day)?;
            calculate_zodiac_from_date(date)
        }
        _ => calculate_zodiac(year),
    };
    Ok(id)
}

async fn run_admin(command: AdminCommand, ctx: &AppContext) -> Result<()> {
    let admin = &ctx.admin;
    match command {
        AdminCommand::Settings => print_json(&admin.get_settings().await?)?,
        AdminCommand::UpdateSettings { file } => {
            let raw = std::fs::read_to_string(&file)?;
            let settings: AdminSettings = serde_json::from_str(&raw)?;
            print_json(&admin.update_settings(&settings).await?)?;
        }
        AdminCommand::Users => print_json(&admin.list_users().await?)?,
        AdminCommand::Contents => print_json(&admin.list_contents().await?)?,
        AdminCommand::Notifications => print_json(&admin.list_notifications().await?)?,
        AdminCommand::Grade {
            user_id,
            new_grade,
            reason,
        } => print_json(&admin.update_user_grade(&user_id, &new_grade, &reason).await?)?,
        AdminCommand::ContentStatus { content_id, status } => {
            print_json(&admin.update_content_status(&content_id, &status).await?)?
        }
        AdminCommand::DeleteContent { content_id } => {
            admin.delete_content(&content_id).await?;
            println!("✅ Deleted {}", content_id);
        }
        AdminCommand::Notify {
            notification_type,
            users,
            content,
        } => print_json(
            &admin
                .send_notification(&notification_type, &users, &content)
                .await?,
        )?,
    }
    Ok(())
}

async fn run_monitor(ctx: &AppContext, max_messages: Option<usize>) -> Result<()> {
    tracing::info!("🔍 Streaming monitor events from {}", ctx.monitor.url());
    let policy = ctx.monitor.policy();
    tracing::debug!(
        "Reconnect delays: {:?}",
        policy.schedule().collect::<Vec<_>>()
    );
    if max_messages == Some(0) {
        return Ok(());
    }
    let mut handle = ctx.start_monitor();
    let mut received = 0usize;

    loop {
        let message = tokio::select! {
            message = handle.recv() => message,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, closing monitor");
                break;
            }
        };

        let Some(message) = message else {
            // loop ended on its own, surface its result
            return handle.join().await;
        };
        println!("{}", serde_json::to_string(&message)?);
        received += 1;
        if max_messages.is_some_and(|max| received >= max) {
            break;
        }
    }

    handle.shutdown().await
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
