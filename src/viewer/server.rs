use std::{convert::Infallible, net::SocketAddr, sync::Arc};

use bytes::Bytes;
use eyre::Context;
use http::header::CONTENT_TYPE;
use http::HeaderValue;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::{render, HelpInfo};

/// Handle to a running help viewer.
///
/// The listener stops when the handle is dropped; [`ViewerHandle::shutdown`]
/// additionally waits for the accept loop to wind down.
pub struct ViewerHandle {
    addr: SocketAddr,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl ViewerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting connections and wait for the accept loop to exit.
    pub async fn shutdown(self) -> eyre::Result<()> {
        let _ = self.shutdown.send(true);
        self.task.await.context("Help viewer task panicked")?;
        Ok(())
    }
}

/// Bind `addr` and serve `help` over HTTP/1.1 in a background task.
///
/// Two routes: `/` lists every attribute as a link, `/help/<name>` renders
/// one attribute's type label and documentation. Unknown names get a 404.
pub async fn serve(addr: SocketAddr, help: HelpInfo) -> eyre::Result<ViewerHandle> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed binding help viewer to {}", addr))?;
    let addr = listener
        .local_addr()
        .context("Failed reading help viewer local address")?;

    let (shutdown, mut signal) = watch::channel(false);
    let help = Arc::new(help);

    let task = tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = signal.changed() => break,
                accepted = listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        tracing::debug!(target: "devkit", "help viewer connection from {}", peer);
                        let help = help.clone();
                        tokio::spawn(async move {
                            let service = service_fn(move |req: Request<Incoming>| {
                                let help = help.clone();
                                async move { Ok::<_, Infallible>(respond(&req, &help)) }
                            });

                            if let Err(err) = http1::Builder::new()
                                .serve_connection(TokioIo::new(stream), service)
                                .await
                            {
                                tracing::debug!(target: "devkit", "help viewer connection error: {}", err);
                            }
                        });
                    }
                    Err(err) => {
                        tracing::warn!(target: "devkit", "help viewer accept failed: {}", err);
                    }
                },
            }
        }
    });

    Ok(ViewerHandle {
        addr,
        shutdown,
        task,
    })
}

fn respond(req: &Request<Incoming>, help: &HelpInfo) -> Response<Full<Bytes>> {
    let page = render::route(req.method(), req.uri().path(), help);

    let mut response = Response::new(Full::new(Bytes::from(page.body)));
    *response.status_mut() = page.status;
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    response
}
