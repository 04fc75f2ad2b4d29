use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name    = "calcpro-api",
    about   = "Liveness endpoint for the Calculadora Pro API",
    version
)]
pub struct Config {
    /// Host address to listen on.
    #[arg(long, env = "CALCPRO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "CALCPRO_PORT", default_value_t = 5000)]
    pub port: u16,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
