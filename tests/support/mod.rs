// One referee server per test binary, started on an ephemeral port.
use std::{net::SocketAddr, sync::OnceLock, sync::mpsc, time::Duration};

static BASE_URL: OnceLock<String> = OnceLock::new();

// Zero-length countdown so a started match accepts frames right away.
fn test_settings() -> rps_referee::ServerSettings {
    rps_referee::ServerSettings {
        winning_score: 3,
        countdown: Duration::ZERO,
        tick_interval: Duration::from_millis(20),
    }
}

// Start the server on first use and return its base URL.
pub fn ensure_server() -> &'static str {
    BASE_URL.get_or_init(|| {
        let (addr_tx, addr_rx) = mpsc::channel::<SocketAddr>();

        // A dedicated OS thread and runtime outlive the per-test `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                addr_tx.send(addr).expect("publish server address");
                rps_referee::run_with_settings(listener, test_settings())
                    .await
                    .expect("server failed");
            });
        });

        let addr = addr_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("server did not publish its address");
        wait_until_accepting(addr);
        format!("http://{addr}")
    })
}

fn wait_until_accepting(addr: SocketAddr) {
    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("server did not become ready in time");
}
