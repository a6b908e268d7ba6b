//! Auth subcommand implementations.

mod logout;
mod refresh_token;
mod register;
mod request_otp;
mod verify_otp;
mod whoami;

use anyhow::Result;
use clap::{Args, Subcommand};

use agris_client::AgrisClient;

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Register a new account (sends an OTP)
    Register(register::RegisterArgs),

    /// Request a login OTP for an existing account
    RequestOtp(request_otp::RequestOtpArgs),

    /// Verify an OTP and establish a session
    VerifyOtp(verify_otp::VerifyOtpArgs),

    /// Display the active session
    Whoami(whoami::WhoamiArgs),

    /// Refresh the session tokens
    RefreshToken(refresh_token::RefreshTokenArgs),

    /// Discard the active session
    Logout(logout::LogoutArgs),
}

pub async fn handle(cmd: AuthCommand, client: &AgrisClient) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Register(args) => register::run(args, client).await,
        AuthSubcommand::RequestOtp(args) => request_otp::run(args, client).await,
        AuthSubcommand::VerifyOtp(args) => verify_otp::run(args, client).await,
        AuthSubcommand::Whoami(args) => whoami::run(args, client).await,
        AuthSubcommand::RefreshToken(args) => refresh_token::run(args, client).await,
        AuthSubcommand::Logout(args) => logout::run(args, client).await,
    }
}
