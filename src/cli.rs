use clap::{Parser, Subcommand};
use eagle_reader::Config;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub gateway: GatewayArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: read the power demand and energy summations.
    #[clap(name = "read")]
    Read(ReadArgs),

    /// List the devices paired with the gateway.
    #[clap(name = "devices")]
    Devices,

    /// Dump all the variables reported by the device.
    #[clap(name = "variables")]
    Variables,
}

#[derive(Parser)]
pub struct GatewayArgs {
    /// Gateway IP address or host name, for example: `192.168.1.10`.
    #[clap(long = "host", env = "EAGLE_HOST")]
    host: String,

    /// Cloud ID printed on the gateway label.
    #[clap(long = "cloud-id", env = "EAGLE_CLOUD_ID")]
    cloud_id: String,

    /// Install code printed on the gateway label.
    #[clap(long = "install-code", env = "EAGLE_INSTALL_CODE", hide_env_values = true)]
    install_code: String,

    /// Timeout of every single request.
    #[clap(long = "timeout", env = "EAGLE_TIMEOUT", default_value = "2s")]
    timeout: humantime::Duration,
}

impl GatewayArgs {
    pub fn into_config(self) -> Config {
        Config::builder()
            .host(self.host)
            .cloud_id(self.cloud_id)
            .install_code(self.install_code)
            .timeout(self.timeout.into())
            .build()
    }
}

#[derive(Parser)]
pub struct ReadArgs {
    /// Print JSON instead of a table.
    #[clap(long)]
    pub json: bool,
}
