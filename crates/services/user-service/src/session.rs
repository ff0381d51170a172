//! JSON-lines command driver.
//!
//! Each input line is one command object tagged by `op`:
//!
//! ```text
//! {"op":"signup","name":"Ana","email":"ana@example.com","password":"secret"}
//! {"op":"list_users","per_page":5,"sort":"name","sort_dir":"asc"}
//! ```
//!
//! Each command yields one output line, `{"ok": ...}` or
//! `{"error": {"code", "message", "fields"?}}`. Blank lines and lines
//! starting with `#` are skipped. A line that does not parse produces a
//! `BAD_REQUEST` reply and the session carries on.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{FieldErrors, SearchProps};

use crate::usecases::{
    DeleteUserInput, GetUserInput, SigninInput, SignupInput, UpdatePasswordInput,
    UpdateUserInput, UserUseCases,
};

/// One scripted operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Signup(SignupInput),
    Signin(SigninInput),
    GetUser {
        id: String,
    },
    ListUsers(SearchProps),
    UpdateUser {
        id: String,
        #[serde(default)]
        name: String,
    },
    UpdatePassword {
        id: String,
        #[serde(default)]
        password: String,
        #[serde(default, alias = "oldPassword")]
        old_password: String,
    },
    DeleteUser {
        id: String,
    },
}

impl Command {
    /// Wire name of the operation.
    pub fn op(&self) -> &'static str {
        match self {
            Command::Signup(_) => "signup",
            Command::Signin(_) => "signin",
            Command::GetUser { .. } => "get_user",
            Command::ListUsers(_) => "list_users",
            Command::UpdateUser { .. } => "update_user",
            Command::UpdatePassword { .. } => "update_password",
            Command::DeleteUser { .. } => "delete_user",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum Reply {
    Ok(Value),
    Error(ErrorReply),
}

#[derive(Debug, Serialize)]
struct ErrorReply {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<FieldErrors>,
}

impl From<AppError> for ErrorReply {
    fn from(err: AppError) -> Self {
        Self {
            code: err.code(),
            message: err.user_message(),
            fields: err.fields().cloned(),
        }
    }
}

/// Counts reported once a script has been drained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Executes commands against one set of use cases.
pub struct Session {
    usecases: UserUseCases,
}

impl Session {
    pub fn new(usecases: UserUseCases) -> Self {
        Self { usecases }
    }

    /// Run one command, returning its JSON payload.
    pub async fn execute(&self, command: Command) -> AppResult<Value> {
        match command {
            Command::Signup(input) => to_value(self.usecases.signup.execute(input).await?),
            Command::Signin(input) => to_value(self.usecases.signin.execute(input).await?),
            Command::GetUser { id } => {
                let input = GetUserInput { id: parse_id(&id)? };
                to_value(self.usecases.get_user.execute(input).await?)
            }
            Command::ListUsers(input) => {
                to_value(self.usecases.list_users.execute(input).await?)
            }
            Command::UpdateUser { id, name } => {
                let input = UpdateUserInput {
                    id: parse_id(&id)?,
                    name,
                };
                to_value(self.usecases.update_user.execute(input).await?)
            }
            Command::UpdatePassword {
                id,
                password,
                old_password,
            } => {
                let input = UpdatePasswordInput {
                    id: parse_id(&id)?,
                    password,
                    old_password,
                };
                to_value(self.usecases.update_password.execute(input).await?)
            }
            Command::DeleteUser { id } => {
                let input = DeleteUserInput { id: parse_id(&id)? };
                self.usecases.delete_user.execute(input).await?;
                Ok(Value::Null)
            }
        }
    }

    /// Handle one raw line. `None` means the line was skipped.
    pub async fn handle_line(&self, line: &str) -> Option<AppResult<Value>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let result = match serde_json::from_str::<Command>(line) {
            Ok(command) => {
                debug!(op = command.op(), "Executing command");
                self.execute(command).await
            }
            Err(e) => Err(AppError::bad_request(format!("Malformed command: {}", e))),
        };
        Some(result)
    }

    /// Drain `reader`, writing one reply line per command to `writer`.
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> std::io::Result<RunSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut summary = RunSummary::default();
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            let Some(result) = self.handle_line(&line).await else {
                continue;
            };

            let reply = match result {
                Ok(value) => {
                    summary.succeeded += 1;
                    Reply::Ok(value)
                }
                Err(err) => {
                    summary.failed += 1;
                    Reply::Error(err.into())
                }
            };

            let mut encoded = serde_json::to_vec(&reply)?;
            encoded.push(b'\n');
            writer.write_all(&encoded).await?;
        }

        writer.flush().await?;
        Ok(summary)
    }
}

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::bad_request(format!("Invalid user id: {}", raw)))
}

fn to_value<T: Serialize>(output: T) -> AppResult<Value> {
    serde_json::to_value(output)
        .map_err(|e| AppError::internal(format!("Failed to encode output: {}", e)))
}
