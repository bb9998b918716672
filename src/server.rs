use crate::context::InboundRequest;
use crate::proxy::CorsProxy;
use crate::result::ProxyResponse;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::IpAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info};

/// Accept loop: one task per connection, the engine shared read-only.
pub async fn serve(listener: TcpListener, proxy: Arc<CorsProxy>) -> std::io::Result<()> {
    loop {
        let (stream, peer) = listener.accept().await?;
        let proxy = proxy.clone();
        let io = TokioIo::new(stream);

        tokio::spawn(async move {
            let service = service_fn(move |request| {
                let proxy = proxy.clone();
                async move { Ok::<_, Infallible>(handle(request, peer.ip(), &proxy).await) }
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                debug!(error = %err, "connection error");
            }
        });
    }
}

async fn handle(
    request: Request<Incoming>,
    peer_ip: IpAddr,
    proxy: &CorsProxy,
) -> Response<Full<Bytes>> {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = match inbound(request, peer_ip).await {
        Ok(inbound) => proxy.handle(inbound).await,
        Err(err) => {
            debug!(error = %err, "failed to read request body");
            bad_request()
        }
    };

    info!(%method, %path, status = response.status.as_u16(), "handled request");
    into_hyper(response)
}

async fn inbound(
    request: Request<Incoming>,
    peer_ip: IpAddr,
) -> Result<InboundRequest, hyper::Error> {
    let (parts, body) = request.into_parts();
    let body = body.collect().await?.to_bytes();

    Ok(InboundRequest {
        method: parts.method,
        query: parts.uri.query().map(str::to_owned),
        headers: parts.headers,
        body,
        peer_ip: Some(peer_ip),
    })
}

fn into_hyper(response: ProxyResponse) -> Response<Full<Bytes>> {
    let mut http_response = Response::new(Full::new(response.body));
    *http_response.status_mut() = response.status;
    *http_response.headers_mut() = response.headers;
    http_response
}

fn bad_request() -> ProxyResponse {
    ProxyResponse {
        status: StatusCode::BAD_REQUEST,
        headers: http::HeaderMap::new(),
        body: Bytes::from_static(b"Bad Request"),
    }
}
