//! Templates shipped with svcgen.
//!
//! `svcgen init` writes these into the template root as `<id>.tmpl`, and
//! [`InMemoryTemplates::builtin`](crate::renderer::InMemoryTemplates::builtin)
//! serves them directly. Per-service templates see `SERVICE_NAME`,
//! `SERVICE_TITLE`, `SERVICE_PASCAL` and `RESOURCE_SEGMENT`; registry
//! templates see only `SERVICES`.

/// File extension of templates in a template root.
pub const TEMPLATE_EXTENSION: &str = "tmpl";

pub const API_STUB: &str = r#"package {{ SERVICE_NAME }}

import (
	"golang.org/x/net/context"
	"google.golang.org/grpc"

	"github.com/grpc-ecosystem/grpc-gateway/runtime"
)

// RegisterHTTPEndpoint exposes the {{ SERVICE_TITLE }} API through the gateway mux.
func RegisterHTTPEndpoint(ctx context.Context, mux *runtime.ServeMux,
	endpoint string, opts []grpc.DialOption) (err error) {
	return Register{{ SERVICE_PASCAL }}APIHandlerFromEndpoint(ctx, mux, endpoint, opts)
}

// RegisterGRPCEndpoint attaches the {{ SERVICE_TITLE }} API to a gRPC server.
func RegisterGRPCEndpoint(server *grpc.Server) {
	Register{{ SERVICE_PASCAL }}APIServer(server, &api{})
}

type api struct{}

func (a *api) Get{{ SERVICE_PASCAL }}(ctx context.Context,
	req *Get{{ SERVICE_PASCAL }}Request) (*Get{{ SERVICE_PASCAL }}Response, error) {
	return &Get{{ SERVICE_PASCAL }}Response{Message: "{{ SERVICE_TITLE }} API"}, nil
}
"#;

pub const SERVICE_STUB: &str = r#"package {{ SERVICE_NAME }}

import (
	"golang.org/x/net/context"
)

// Service implements the {{ SERVICE_TITLE }} business logic behind the API.
type Service struct{}

// New{{ SERVICE_PASCAL }}Service builds the {{ SERVICE_TITLE }} service.
func New{{ SERVICE_PASCAL }}Service() *Service {
	return &Service{}
}

func (s *Service) Get{{ SERVICE_PASCAL }}(ctx context.Context) (string, error) {
	return "{{ SERVICE_TITLE }} service", nil
}
"#;

pub const API_PROTO: &str = r#"syntax = "proto3";

package {{ SERVICE_NAME }};

import "google/api/annotations.proto";

// {{ SERVICE_TITLE }} API.
service {{ SERVICE_PASCAL }}API {
  rpc Get{{ SERVICE_PASCAL }}(Get{{ SERVICE_PASCAL }}Request) returns (Get{{ SERVICE_PASCAL }}Response) {
    option (google.api.http) = {
      get: "/v1/{{ RESOURCE_SEGMENT }}"
    };
  }
}

message Get{{ SERVICE_PASCAL }}Request {}

message Get{{ SERVICE_PASCAL }}Response {
  string message = 1;
}
"#;

pub const SERVICE_PROTO: &str = r#"syntax = "proto3";

package {{ SERVICE_NAME }}service;

// {{ SERVICE_TITLE }} service.
service {{ SERVICE_PASCAL }}Service {
  rpc Get{{ SERVICE_PASCAL }}(Get{{ SERVICE_PASCAL }}Request) returns (Get{{ SERVICE_PASCAL }}Response) {}
}

message Get{{ SERVICE_PASCAL }}Request {}

message Get{{ SERVICE_PASCAL }}Response {
  string message = 1;
}
"#;

pub const HTTP_REGISTRY: &str = r#"package server

import (
	"golang.org/x/net/context"
	"google.golang.org/grpc"

	"github.com/grpc-ecosystem/grpc-gateway/runtime"
)

type registerHTTPEndpoint func(ctx context.Context, mux *runtime.ServeMux,
	endpoint string, opts []grpc.DialOption) (err error)

var registeredHTTPEndpoints = []registerHTTPEndpoint{
{%- for service in SERVICES %}
	{{ service }}.RegisterHTTPEndpoint,
{%- endfor %}
}
"#;

pub const RPC_REGISTRY: &str = r#"package server

import (
	"google.golang.org/grpc"
)

type registerGRPCEndpoint func(server *grpc.Server)

var registeredGRPCEndpoints = []registerGRPCEndpoint{
{%- for service in SERVICES %}
	{{ service }}.RegisterGRPCEndpoint,
{%- endfor %}
}
"#;

/// Every built-in template as `(id, source)`.
pub fn all() -> [(&'static str, &'static str); 6] {
    [
        ("api_stub", API_STUB),
        ("service_stub", SERVICE_STUB),
        ("api_proto", API_PROTO),
        ("service_proto", SERVICE_PROTO),
        ("http_registry", HTTP_REGISTRY),
        ("rpc_registry", RPC_REGISTRY),
    ]
}

/// Built-in source for `id`, if there is one.
pub fn get(id: &str) -> Option<&'static str> {
    all()
        .into_iter()
        .find_map(|(name, source)| (name == id).then_some(source))
}

/// File name of `id` inside a template root.
pub fn file_name(id: &str) -> String {
    format!("{id}.{TEMPLATE_EXTENSION}")
}
