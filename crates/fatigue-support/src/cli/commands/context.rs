//! Chat context command

use crate::cli::{print_json, OutputFormat, Session};
use crate::context::ChatContext;
use crate::error::Result;
use crate::models::UserId;

/// Print the context strings the chat layer would receive
pub fn show(session: &Session, user_id: UserId, days: Option<u32>, format: OutputFormat) -> Result<()> {
    let context = ChatContext::for_user(&session.store, user_id, session.lookback(days))?;

    if format == OutputFormat::Json {
        return print_json(&context);
    }

    println!("Personal information:\n{}\n", context.personal_info);
    println!("Roster information:\n{}\n", context.roster_info);
    println!("Exercise information:\n{}\n", context.exercise_info);
    println!("Sleep information:\n{}", context.sleep_info);

    Ok(())
}
