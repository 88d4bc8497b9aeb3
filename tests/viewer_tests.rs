use softboard::{
    ConnectOptions, ConnectionStatus, FramebufferClient, PageContext, StatusLine, Viewer,
    ViewerConfig, ViewerError, ViewerEvent,
};
use log::LevelFilter;
use url::Url;

#[derive(Default)]
struct RecordingClient {
    connections: Vec<(String, ConnectOptions)>,
}

impl FramebufferClient for RecordingClient {
    fn connect(&mut self, url: &Url, options: &ConnectOptions) {
        self.connections.push((url.to_string(), options.clone()));
    }
}

#[derive(Default)]
struct RecordingStatus {
    shown: Vec<ConnectionStatus>,
}

impl StatusLine for RecordingStatus {
    fn show(&mut self, status: ConnectionStatus) {
        self.shown.push(status);
    }
}

fn page(hostname: &str, https: bool) -> PageContext {
    PageContext {
        hostname: hostname.to_string(),
        https,
    }
}

#[test]
fn default_url_follows_page() {
    let config = ViewerConfig::default();
    let url = config.url(&page("mtda.local", false)).unwrap();
    assert_eq!(url.as_str(), "ws://mtda.local:5901/websockify");

    let url = config.url(&page("mtda.local", true)).unwrap();
    assert_eq!(url.scheme(), "wss");
}

#[test]
fn explicit_settings_override_page() {
    let config = ViewerConfig {
        host: "10.0.0.2".to_string(),
        port: 6080,
        path: "/vnc".to_string(),
        encrypt: Some(false),
        ..ViewerConfig::default()
    };
    let url = config.url(&page("ignored", true)).unwrap();
    assert_eq!(url.as_str(), "ws://10.0.0.2:6080/vnc");
}

#[test]
fn token_is_injected_once() {
    let config = ViewerConfig {
        token: Some("abc123".to_string()),
        ..ViewerConfig::default()
    };
    let url = config.url(&page("host", false)).unwrap();
    assert_eq!(url.as_str(), "ws://host:5901/websockify?token=abc123");

    let config = ViewerConfig {
        path: "websockify?token=keep".to_string(),
        token: Some("other".to_string()),
        ..ViewerConfig::default()
    };
    let url = config.url(&page("host", false)).unwrap();
    assert_eq!(url.query(), Some("token=keep"));
}

#[test]
fn missing_endpoint() {
    let config = ViewerConfig::default();
    assert!(matches!(
        config.url(&page("", false)),
        Err(ViewerError::MissingEndpoint)
    ));

    let config = ViewerConfig {
        port: 0,
        ..ViewerConfig::default()
    };
    assert!(matches!(
        config.url(&page("host", false)),
        Err(ViewerError::MissingEndpoint)
    ));
}

#[test]
fn load_connects_with_options() {
    let config = ViewerConfig {
        view_only: true,
        resize: true,
        ..ViewerConfig::default()
    };
    let mut viewer = Viewer::new(
        config,
        page("board", false),
        RecordingClient::default(),
        RecordingStatus::default(),
    );

    let url = viewer.load().unwrap();
    assert_eq!(url.host_str(), Some("board"));
    assert_eq!(viewer.status(), Some(ConnectionStatus::Connecting));

    let (connected_to, options) = &viewer.client().connections[0];
    assert_eq!(connected_to, "ws://board:5901/websockify");
    assert!(options.shared);
    assert!(options.view_only);
    assert!(options.scale_viewport);
    assert!(options.resize_session);
}

#[test]
fn load_without_endpoint_reports_status() {
    let mut viewer = Viewer::new(
        ViewerConfig::default(),
        page("", false),
        RecordingClient::default(),
        RecordingStatus::default(),
    );
    assert!(viewer.load().is_err());
    assert!(viewer.client().connections.is_empty());
    assert_eq!(
        viewer.status_line().shown,
        vec![ConnectionStatus::Connecting, ConnectionStatus::Misconfigured]
    );
}

#[test]
fn status_follows_events() {
    let mut viewer = Viewer::new(
        ViewerConfig::default(),
        page("board", false),
        RecordingClient::default(),
        RecordingStatus::default(),
    );
    viewer.load().unwrap();

    viewer.handle(ViewerEvent::Connect);
    assert_eq!(viewer.status().map(ConnectionStatus::text), Some("Video"));

    viewer.handle(ViewerEvent::DesktopName("target".to_string()));
    assert_eq!(viewer.desktop_name(), Some("target"));

    viewer.handle(ViewerEvent::Disconnect { clean: true });
    assert_eq!(viewer.status(), Some(ConnectionStatus::Disconnected));

    viewer.handle(ViewerEvent::Disconnect { clean: false });
    assert_eq!(viewer.status(), Some(ConnectionStatus::Error));
    assert_eq!(ConnectionStatus::Error.color(), "red");
}

#[test]
fn load_with_unparseable_host_reports_error() {
    let config = ViewerConfig {
        host: "bad host".to_string(),
        ..ViewerConfig::default()
    };
    let mut viewer = Viewer::new(
        config,
        page("board", false),
        RecordingClient::default(),
        RecordingStatus::default(),
    );

    assert!(matches!(viewer.load(), Err(ViewerError::InvalidUrl(_))));
    assert!(viewer.client().connections.is_empty());
    assert_eq!(viewer.status(), Some(ConnectionStatus::Error));
    assert_eq!(
        viewer.status_line().shown,
        vec![ConnectionStatus::Connecting, ConnectionStatus::Error]
    );
}

#[test]
fn logging_setting_maps_to_level_filter() {
    let level = |name: &str| {
        ViewerConfig {
            logging: name.to_string(),
            ..ViewerConfig::default()
        }
        .log_level()
    };
    assert_eq!(ViewerConfig::default().log_level(), LevelFilter::Warn);
    assert_eq!(level("debug"), LevelFilter::Debug);
    assert_eq!(level("Info"), LevelFilter::Info);
    assert_eq!(level("error"), LevelFilter::Error);
    assert_eq!(level("none"), LevelFilter::Off);
    assert_eq!(level("chatty"), LevelFilter::Warn);
}
