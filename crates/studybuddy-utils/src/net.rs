use listenfd::ListenFd;
use std::io;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;

/// Binds the http listener.
///
/// A socket passed in through `listenfd` wins when neither host nor port were configured.
pub async fn create_listener(
    (host, port): (Option<IpAddr>, Option<u16>),
    (default_host, default_port): (IpAddr, u16),
) -> io::Result<TcpListener> {
    if host.is_none() && port.is_none() {
        let mut listenfd = ListenFd::from_env();
        if let Some(listener) = listenfd.take_tcp_listener(0)? {
            listener.set_nonblocking(true)?;
            tracing::debug!("using socket from listenfd");
            return TcpListener::from_std(listener);
        }
    }

    let address = SocketAddr::from((host.unwrap_or(default_host), port.unwrap_or(default_port)));
    tracing::debug!(%address, "binding listener");
    TcpListener::bind(address).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;
    use test_log::test;

    #[test(tokio::test)]
    async fn test_binds_requested_address() {
        let listener = create_listener(
            (Some(IpAddr::V4(Ipv4Addr::LOCALHOST)), Some(0)),
            (IpAddr::V4(Ipv4Addr::UNSPECIFIED), 3000),
        )
        .await
        .unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }
}
