use std::net::SocketAddr;

use error_stack::ResultExt;

use driver::env_opt;
use kernel::prelude::config::DefaultPageSize;
use kernel::KernelError;

static DEFAULT_PAGE_SIZE: &str = "DEFAULT_PAGE_SIZE";
static SERVER_PORT: &str = "SERVER_PORT";

const FALLBACK_PAGE_SIZE: i64 = 20;
const FALLBACK_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_page_size: DefaultPageSize,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::from_values(env_opt(DEFAULT_PAGE_SIZE)?, env_opt(SERVER_PORT)?)
    }

    fn from_values(
        page_size: Option<String>,
        port: Option<String>,
    ) -> error_stack::Result<Self, KernelError> {
        let page_size = match page_size {
            None => FALLBACK_PAGE_SIZE,
            Some(value) => value
                .trim()
                .parse::<i64>()
                .change_context(KernelError::Configuration)
                .attach_printable_lazy(|| format!("{DEFAULT_PAGE_SIZE}={value} is not a number"))?,
        };
        let port = match port {
            None => FALLBACK_PORT,
            Some(value) => value
                .trim()
                .parse::<u16>()
                .change_context(KernelError::Configuration)
                .attach_printable_lazy(|| format!("{SERVER_PORT}={value} is not a port"))?,
        };
        Ok(Self {
            default_page_size: DefaultPageSize::new(page_size)?,
            port,
        })
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
