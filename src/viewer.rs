//! Remote framebuffer viewer bootstrap.
//!
//! Builds the websocket URL and client options for the console's VNC
//! stream and tracks the status line. The pixel transport itself belongs
//! to the host's [`FramebufferClient`].

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub const DEFAULT_PORT: u16 = 5901;
pub const DEFAULT_PATH: &str = "websockify";

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("must specify host and port")]
    MissingEndpoint,
    #[error("invalid viewer url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Viewer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// VNC proxy host; empty means the host serving the page
    pub host: String,
    /// VNC proxy port; 0 means unset
    pub port: u16,
    /// Websocket path on the proxy
    pub path: String,
    /// Proxy token, injected into the path query when absent.
    ///
    /// Storing it as a `token` cookie for the proxy is left to the host page.
    pub token: Option<String>,
    /// Use `wss`; unset follows the page scheme
    pub encrypt: Option<bool>,
    /// Share the session with other viewers
    pub shared: bool,
    /// Do not forward input to the remote
    pub view_only: bool,
    /// Scale the remote framebuffer to the viewport
    pub scale: bool,
    /// Ask the remote to resize to the viewport
    pub resize: bool,
    /// UltraVNC repeater id
    pub repeater_id: String,
    pub password: String,
    /// Client log level: `debug`, `info`, `warn`, `error` or `none`
    pub logging: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: DEFAULT_PORT,
            path: DEFAULT_PATH.to_string(),
            token: None,
            encrypt: None,
            shared: true,
            view_only: false,
            scale: true,
            resize: false,
            repeater_id: String::new(),
            password: String::new(),
            logging: "warn".to_string(),
        }
    }
}

/// Where the console page itself was loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    pub hostname: String,
    pub https: bool,
}

/// Options handed to the framebuffer client along with the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectOptions {
    pub repeater_id: String,
    pub shared: bool,
    pub password: String,
    pub view_only: bool,
    pub scale_viewport: bool,
    pub resize_session: bool,
}

impl ViewerConfig {
    /// `ws[s]://host:port/path`, with the proxy token added to the query.
    pub fn url(&self, page: &PageContext) -> Result<Url, ViewerError> {
        let host = if self.host.is_empty() {
            page.hostname.as_str()
        } else {
            self.host.as_str()
        };
        if host.is_empty() || self.port == 0 {
            return Err(ViewerError::MissingEndpoint);
        }
        let scheme = if self.encrypt.unwrap_or(page.https) {
            "wss"
        } else {
            "ws"
        };
        let path = self.path.trim_start_matches('/');
        let mut url = Url::parse(&format!("{scheme}://{host}:{}/{path}", self.port))?;
        let has_token = url.query_pairs().any(|(k, _)| k == "token");
        if let Some(token) = self.token.as_deref().filter(|t| !t.is_empty())
            && !has_token
        {
            url.query_pairs_mut().append_pair("token", token);
        }
        Ok(url)
    }

    /// Level filter for the `logging` setting; unknown names fall back to `warn`.
    pub fn log_level(&self) -> LevelFilter {
        match self.logging.trim().to_ascii_lowercase().as_str() {
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "none" | "off" => LevelFilter::Off,
            other => {
                warn!("unknown viewer log level {other:?}, using warn");
                LevelFilter::Warn
            }
        }
    }

    pub fn connect_options(&self) -> ConnectOptions {
        ConnectOptions {
            repeater_id: self.repeater_id.clone(),
            shared: self.shared,
            password: self.password.clone(),
            view_only: self.view_only,
            scale_viewport: self.scale,
            resize_session: self.resize,
        }
    }
}

/// Status line states shown next to the video element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    /// The server closed the session cleanly.
    Disconnected,
    /// The session dropped.
    Error,
    /// No host or port to connect to.
    Misconfigured,
}

impl ConnectionStatus {
    pub fn text(self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "Connecting",
            ConnectionStatus::Connected => "Video",
            ConnectionStatus::Disconnected => "Disconnected",
            ConnectionStatus::Error => "Error",
            ConnectionStatus::Misconfigured => "Must specify host and port in URL",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "orange",
            ConnectionStatus::Connected => "green",
            _ => "red",
        }
    }

    pub fn from_disconnect(clean: bool) -> Self {
        if clean {
            ConnectionStatus::Disconnected
        } else {
            ConnectionStatus::Error
        }
    }
}

/// Notifications emitted by the framebuffer client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    Connect,
    Disconnect { clean: bool },
    DesktopName(String),
}

/// The remote framebuffer client (noVNC's RFB in the web console).
pub trait FramebufferClient {
    fn connect(&mut self, url: &Url, options: &ConnectOptions);
}

pub trait StatusLine {
    fn show(&mut self, status: ConnectionStatus);
}

pub struct Viewer<C: FramebufferClient, L: StatusLine> {
    config: ViewerConfig,
    page: PageContext,
    client: C,
    status_line: L,
    status: Option<ConnectionStatus>,
    desktop_name: Option<String>,
}

impl<C: FramebufferClient, L: StatusLine> Viewer<C, L> {
    pub fn new(config: ViewerConfig, page: PageContext, client: C, status_line: L) -> Self {
        Self {
            config,
            page,
            client,
            status_line,
            status: None,
            desktop_name: None,
        }
    }

    fn set_status(&mut self, status: ConnectionStatus) {
        self.status = Some(status);
        self.status_line.show(status);
    }

    /// Start the video stream. There is no retry.
    ///
    /// Applies the configured log level first. Without a host or port the
    /// status line shows [`ConnectionStatus::Misconfigured`] and no
    /// connection is attempted; any other URL failure shows
    /// [`ConnectionStatus::Error`].
    pub fn load(&mut self) -> Result<Url, ViewerError> {
        log::set_max_level(self.config.log_level());
        self.set_status(ConnectionStatus::Connecting);
        let url = match self.config.url(&self.page) {
            Ok(url) => url,
            Err(ViewerError::MissingEndpoint) => {
                warn!("viewer has no host or port configured");
                self.set_status(ConnectionStatus::Misconfigured);
                return Err(ViewerError::MissingEndpoint);
            }
            Err(e) => {
                warn!("viewer url rejected: {e}");
                self.set_status(ConnectionStatus::Error);
                return Err(e);
            }
        };
        info!("connecting viewer to {url}");
        let options = self.config.connect_options();
        self.client.connect(&url, &options);
        Ok(url)
    }

    pub fn handle(&mut self, event: ViewerEvent) {
        match event {
            ViewerEvent::Connect => self.set_status(ConnectionStatus::Connected),
            ViewerEvent::Disconnect { clean } => {
                if !clean {
                    warn!("viewer connection dropped");
                }
                self.set_status(ConnectionStatus::from_disconnect(clean));
            }
            ViewerEvent::DesktopName(name) => {
                debug!("remote desktop name: {name}");
                self.desktop_name = Some(name);
            }
        }
    }

    pub fn status(&self) -> Option<ConnectionStatus> {
        self.status
    }

    pub fn desktop_name(&self) -> Option<&str> {
        self.desktop_name.as_deref()
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn status_line(&self) -> &L {
        &self.status_line
    }
}
