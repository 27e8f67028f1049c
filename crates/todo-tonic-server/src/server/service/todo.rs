//! gRPC handler for the todo collection service.
//!
//! [`TodoHandler`] implements the generated [`TodoService`] trait. Each RPC
//! decodes to a plain payload, calls the matching [`TodoStore`] operation,
//! and maps the resulting record(s) back to wire messages. The store is the
//! single source of truth for id assignment and update semantics; nothing
//! here re-validates payloads beyond what the lookup needs.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use todo_tonic_core::Error;
use todo_tonic_core::proto::{
    ListTodosRequest, ListTodosResponse, Todo, todo_service_server::TodoService,
};
use todo_tonic_core::store::{TodoRecord, TodoStore};
use tonic::{Request, Response, Status};

/// gRPC service over a shared [`TodoStore`].
///
/// Cloning is cheap; all clones share the same store and shutdown flag.
#[derive(Clone)]
pub struct TodoHandler {
    store: Arc<TodoStore>,
    shutting_down: Arc<AtomicBool>,
}

impl TodoHandler {
    /// Creates a handler over an existing store.
    ///
    /// The store is injected rather than constructed here so tests and
    /// future callers can share one instance across handlers.
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self {
            store,
            shutting_down: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Marks the service as shutting down. Requests arriving after this
    /// point are refused with `UNAVAILABLE`.
    pub fn shutdown(&self) {
        self.shutting_down.store(true, Ordering::SeqCst);
        tracing::info!("Todo service refusing new requests");
    }

    fn ensure_accepting(&self) -> Result<(), Error> {
        if self.shutting_down.load(Ordering::SeqCst) {
            Err(Error::ServiceShutdown)
        } else {
            Ok(())
        }
    }
}

fn to_proto(record: TodoRecord) -> Todo {
    Todo {
        id: record.id,
        name: record.name,
        done: record.done,
    }
}

#[tonic::async_trait]
impl TodoService for TodoHandler {
    /// Creates a todo. Any client-supplied `id` is discarded; the store
    /// assigns ids as the record count at insertion.
    #[tracing::instrument(skip_all, fields(name = %req.get_ref().name))]
    async fn create_todo(&self, req: Request<Todo>) -> Result<Response<Todo>, Status> {
        self.ensure_accepting()?;

        let payload = req.into_inner();
        let record = self.store.create(payload.name, payload.done);
        tracing::debug!(id = record.id, "created todo");

        Ok(Response::new(to_proto(record)))
    }

    /// Returns every record in insertion order.
    #[tracing::instrument(skip_all)]
    async fn list_todos(
        &self,
        _req: Request<ListTodosRequest>,
    ) -> Result<Response<ListTodosResponse>, Status> {
        self.ensure_accepting()?;

        let todos = self.store.list().into_iter().map(to_proto).collect();

        Ok(Response::new(ListTodosResponse { todos }))
    }

    /// Overwrites `name` and `done` of the record matching `id`.
    ///
    /// Fails with `NOT_FOUND` when no record matches; the store is left
    /// unchanged in that case.
    #[tracing::instrument(skip_all, fields(id = req.get_ref().id))]
    async fn update_todo(&self, req: Request<Todo>) -> Result<Response<Todo>, Status> {
        self.ensure_accepting()?;

        let payload = req.into_inner();
        let record = self.store.update(payload.id, payload.name, payload.done)?;

        Ok(Response::new(to_proto(record)))
    }
}
