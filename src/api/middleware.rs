use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    middleware::Logger,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id assigned by [`RequestId`], available through request extensions.
#[derive(Clone, Debug)]
pub struct RequestIdValue(pub String);

/// Access log line carrying the id assigned by [`RequestId`]. `RequestId`
/// must wrap outside this logger so the id is present when the line starts.
pub fn access_logger() -> Logger {
    Logger::new(r#"%a "%r" %s %b %T request_id=%{request_id}xi"#).custom_request_replace(
        "request_id",
        |req| {
            req.extensions()
                .get::<RequestIdValue>()
                .map(|id| id.0.clone())
                .unwrap_or_else(|| "-".to_string())
        },
    )
}

/// Tags every request with a UUID, logs it and echoes it back in the
/// `x-request-id` response header.
pub struct RequestId;

impl<S, B> Transform<S, ServiceRequest> for RequestId
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestIdMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestIdMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequestIdMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestIdMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let id = Uuid::new_v4().to_string();
        req.extensions_mut().insert(RequestIdValue(id.clone()));
        log::debug!("request_id={} {} {}", id, req.method(), req.path());
        let fut = self.service.call(req);
        Box::pin(async move {
            let mut resp = fut.await?;
            log::debug!("request_id={} status={}", id, resp.status());
            if let Ok(value) = HeaderValue::from_str(&id) {
                resp.headers_mut()
                    .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
            }
            Ok(resp)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpRequest, HttpResponse, test, web};

    async fn echo_request_id(req: HttpRequest) -> HttpResponse {
        let id = req
            .extensions()
            .get::<RequestIdValue>()
            .map(|id| id.0.clone())
            .unwrap_or_default();
        HttpResponse::Ok().body(id)
    }

    #[actix_web::test]
    async fn extension_and_header_carry_the_same_id() {
        let app = test::init_service(
            App::new()
                .wrap(access_logger())
                .wrap(RequestId)
                .route("/", web::get().to(echo_request_id)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let header = resp
            .headers()
            .get(REQUEST_ID_HEADER)
            .expect("request id header")
            .to_str()
            .unwrap()
            .to_string();
        let body = test::read_body(resp).await;

        assert_eq!(header.len(), 36);
        assert_eq!(body, header.as_bytes());
    }
}
