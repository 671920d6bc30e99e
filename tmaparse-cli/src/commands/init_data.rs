use super::{line, Output, Source};
use anyhow::Result;
use colored::*;
use tmaparse_core::{init_data, InitData, User};
use tracing::info;

pub fn execute(source: Source<'_>, output: Output<'_>) -> Result<InitData> {
    let raw = source.read()?;
    info!("Parsing init data ({} bytes)", raw.len());

    let init = init_data::parse(raw).map_err(|e| output.reject("init data", e))?;

    output.emit(&init, |init| {
        println!("{} Init data is valid", "✓".green());
        println!("\n=== Init Data ===");
        line("Auth date", Some(init.auth_date.to_rfc3339()));
        line("Hash", Some(&init.hash));
        line("Query ID", init.query_id.as_deref());
        line("Chat type", init.chat_type.as_deref());
        line("Chat instance", init.chat_instance.as_deref());
        line("Start param", init.start_param.as_deref());
        line("Can send after", init.can_send_after);
        if let Some(chat) = &init.chat {
            println!("\n=== Chat ===");
            line("ID", Some(chat.id));
            line("Type", Some(&chat.chat_type));
            line("Title", Some(&chat.title));
            line("Username", chat.username.as_deref());
        }
        print_user("User", init.user.as_ref());
        print_user("Receiver", init.receiver.as_ref());
    })?;

    Ok(init)
}

fn print_user(heading: &str, user: Option<&User>) {
    let Some(user) = user else { return };
    println!("\n=== {} ===", heading);
    line("ID", Some(user.id));
    let name = match &user.last_name {
        Some(last) => format!("{} {}", user.first_name, last),
        None => user.first_name.clone(),
    };
    line("Name", Some(name));
    line("Username", user.username.as_deref());
    line("Language", user.language_code.as_deref());
    if user.is_premium == Some(true) {
        println!("{:<16}{}", "Premium:", "yes".yellow());
    }
    if user.is_bot == Some(true) {
        println!("{:<16}{}", "Bot:", "yes");
    }
}
