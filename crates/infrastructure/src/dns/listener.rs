use crate::dns::server::DnsServerHandler;
use hickory_server::ServerFuture;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinSet;
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    #[error("Failed to bind {protocol} listener on {addr}: {source}")]
    Bind {
        protocol: &'static str,
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("{protocol} listener failed: {reason}")]
    Transport {
        protocol: &'static str,
        reason: String,
    },

    #[error("{protocol} listener stopped unexpectedly")]
    Stopped { protocol: &'static str },

    #[error("Listener task failed: {0}")]
    Task(String),
}

/// UDP socket and TCP listener bound to the same address, served by one
/// shared handler.
pub struct DnsListener {
    udp_socket: UdpSocket,
    tcp_listener: TcpListener,
    handler: DnsServerHandler,
    tcp_timeout: Duration,
}

impl DnsListener {
    /// Bind UDP first, then TCP on the port UDP actually got, so a port of 0
    /// still yields one shared port for both transports.
    pub async fn bind(
        addr: SocketAddr,
        handler: DnsServerHandler,
        tcp_timeout: Duration,
    ) -> Result<Self, ListenerError> {
        let udp_socket = UdpSocket::bind(addr)
            .await
            .map_err(|source| ListenerError::Bind {
                protocol: "UDP",
                addr,
                source,
            })?;
        let udp_addr = udp_socket
            .local_addr()
            .map_err(|source| ListenerError::Bind {
                protocol: "UDP",
                addr,
                source,
            })?;
        info!(protocol = "UDP", bind_address = %udp_addr, "DNS server listening");

        let tcp_listener = TcpListener::bind(udp_addr)
            .await
            .map_err(|source| ListenerError::Bind {
                protocol: "TCP",
                addr: udp_addr,
                source,
            })?;
        info!(protocol = "TCP", bind_address = %udp_addr, "DNS server listening");

        Ok(Self {
            udp_socket,
            tcp_listener,
            handler,
            tcp_timeout,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.udp_socket.local_addr()
    }

    /// Serve both transports until one of them stops.
    ///
    /// The listeners fail together: whichever finishes first aborts the other
    /// and its outcome is returned as an error, since neither is expected to
    /// stop while the process runs.
    pub async fn run(self) -> Result<(), ListenerError> {
        let mut join_set: JoinSet<(&'static str, Result<(), String>)> = JoinSet::new();

        let udp_handler = self.handler.clone();
        let udp_socket = self.udp_socket;
        join_set.spawn(async move {
            let mut server = ServerFuture::new(udp_handler);
            server.register_socket(udp_socket);
            let result = server.block_until_done().await.map_err(|e| e.to_string());
            ("UDP", result)
        });

        let tcp_handler = self.handler;
        let tcp_listener = self.tcp_listener;
        let tcp_timeout = self.tcp_timeout;
        join_set.spawn(async move {
            let mut server = ServerFuture::new(tcp_handler);
            server.register_listener(tcp_listener, tcp_timeout);
            let result = server.block_until_done().await.map_err(|e| e.to_string());
            ("TCP", result)
        });

        info!("DNS server ready to accept queries");

        let first = join_set.join_next().await;
        join_set.abort_all();

        let err = match first {
            Some(Ok((protocol, Ok(())))) => ListenerError::Stopped { protocol },
            Some(Ok((protocol, Err(reason)))) => ListenerError::Transport { protocol, reason },
            Some(Err(e)) => ListenerError::Task(e.to_string()),
            None => ListenerError::Task("no listener was started".to_string()),
        };
        error!(error = %err, "DNS listener terminated, shutting down");
        Err(err)
    }
}
