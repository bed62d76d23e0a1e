/// The configuration parameters for the application
///
/// These can either loaded from command-line, or pulled from environment variables.
///
/// Environment variables are preferred.
///
/// For development convenience, these can also be read from a `.env` file in the working
/// directory where the application is started.
///
/// See `.env.example` in the repository root for details
#[derive(clap::Parser)]
pub struct Config {
    #[clap(long, env, default_value_t = 3000)]
    pub port: u16,

    #[clap(long, env, default_value = "0.0.0.0")]
    pub address: String,

    /// The version string reported by the health and info endpoints.
    #[clap(long, env, default_value = "dev")]
    pub version: String,

    /// The environment name reported by the root endpoint.
    #[clap(long, env = "NODE_ENV", default_value = "development")]
    pub environment: String,

    /// The site-group tag reported by the root endpoint.
    #[clap(long, env, default_value = "SSG1")]
    pub site_group: String,
}
