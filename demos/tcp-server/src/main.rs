//! Simulates an LX200-compatible telescope over a TCP connection, mirroring
//! the reference `tcpserver.py`: one shared [`Store`] behind a mutex, one
//! [`Dispatcher`] per accepted connection.

use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use lx200_protocol::{response, Frame, Response, Store};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[derive(Parser, Debug)]
#[command(about = "Simulates an LX200 compatible telescope with a TCP connection")]
struct Args {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    #[arg(long, default_value_t = 7634)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let addr = format!("{}:{}", args.host, args.port);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("could not bind to `{addr}`"))?;
    log::info!("LX200 TCP server example");
    log::info!("serving on {addr}");

    let store = Arc::new(Mutex::new(Store::new()));

    loop {
        let (stream, peer) = listener
            .accept()
            .await
            .context("could not accept connection")?;
        log::info!("connected: {peer}");

        let store = Arc::clone(&store);
        tokio::spawn(async move {
            if let Err(error) = serve(stream, store).await {
                log::warn!("connection {peer} ended: {error:#}");
            } else {
                log::info!("disconnected: {peer}");
            }
        });
    }
}

/// One [`Frame`] lives for the whole connection, the way the reference
/// `Parser` does in `LX200Protocol.__init__` — a partial frame split
/// across reads must survive to the next one. The shared [`Store`] is
/// locked only for the commit/fill of a single command at a time.
async fn serve(mut stream: TcpStream, store: Arc<Mutex<Store>>) -> anyhow::Result<()> {
    let mut frame = Frame::new();
    let mut buf = [0u8; 1024];

    loop {
        let n = stream
            .read(&mut buf)
            .await
            .context("failed to read from socket")?;
        if n == 0 {
            return Ok(());
        }

        log::debug!("<< {:?}", String::from_utf8_lossy(&buf[..n]));
        frame.feed(&buf[..n]);

        for command in frame.drain() {
            let mut store = store.lock().expect("store mutex poisoned");
            store.commit(&command).context("failed to commit command")?;

            let Some(kind) = response::constructor_for(command.id) else {
                continue;
            };
            let mut reply = Response::new(kind, command.fields.clone());
            store.fill(&mut reply, &command).context("failed to fill response")?;
            drop(store);

            let bytes = reply.format().context("failed to format response")?;
            log::debug!(">> {:?}", String::from_utf8_lossy(&bytes));
            stream
                .write_all(&bytes)
                .await
                .context("failed to write to socket")?;
        }
    }
}
