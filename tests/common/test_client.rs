use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, UdpSocket};

const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy)]
pub enum Transport {
    Udp,
    Tcp,
}

pub struct TestClient {
    server_addr: SocketAddr,
}

impl TestClient {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn build_query(id: u16, name: &str, record_type: RecordType) -> Message {
        let mut query = Query::new();
        query.set_name(Name::from_str(name).unwrap());
        query.set_query_type(record_type);
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);
        message
    }

    /// Send an A query and return the decoded response with its latency.
    pub async fn query(&self, transport: Transport, name: &str) -> (Message, Duration) {
        self.send(transport, &Self::build_query(0x2a2a, name, RecordType::A))
            .await
    }

    pub async fn send(&self, transport: Transport, message: &Message) -> (Message, Duration) {
        let bytes = message.to_vec().unwrap();
        let start = Instant::now();

        let response = tokio::time::timeout(QUERY_TIMEOUT, async {
            match transport {
                Transport::Udp => self.exchange_udp(&bytes).await,
                Transport::Tcp => self.exchange_tcp(&bytes).await,
            }
        })
        .await
        .expect("DNS query timed out");

        let elapsed = start.elapsed();
        (Message::from_vec(&response).unwrap(), elapsed)
    }

    async fn exchange_udp(&self, bytes: &[u8]) -> Vec<u8> {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        socket.send_to(bytes, self.server_addr).await.unwrap();

        let mut buf = vec![0u8; 4096];
        let (len, _) = socket.recv_from(&mut buf).await.unwrap();
        buf.truncate(len);
        buf
    }

    async fn exchange_tcp(&self, bytes: &[u8]) -> Vec<u8> {
        let mut stream = TcpStream::connect(self.server_addr).await.unwrap();

        let len = u16::try_from(bytes.len()).unwrap();
        stream.write_all(&len.to_be_bytes()).await.unwrap();
        stream.write_all(bytes).await.unwrap();

        let mut len_buf = [0u8; 2];
        stream.read_exact(&mut len_buf).await.unwrap();
        let mut buf = vec![0u8; u16::from_be_bytes(len_buf) as usize];
        stream.read_exact(&mut buf).await.unwrap();
        buf
    }
}
