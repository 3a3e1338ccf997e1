//! Pulse - Agent Task Status Adapter
//!
//! Pulse es un adaptador delgado que permite a un agente autónomo reportar
//! el progreso de sus tareas a un servicio Task Manager externo, y consultar
//! estado e historial desde él.
//!
//! # Arquitectura
//!
//! - **Client abstraction**: un contrato único ([`client::TaskManagerClient`])
//!   con dos implementaciones intercambiables: HTTP (servicio remoto) y
//!   mock en memoria (tests sin red)
//! - **Result normalization**: todos los modos de fallo (timeout, conexión,
//!   4xx/5xx, respuestas malformadas) se normalizan en un único
//!   [`models::OperationResult`]
//! - **Tool surface**: las cuatro operaciones expuestas como herramientas
//!   invocables con validación de entrada
//!
//! # Módulos Principales
//!
//! - [`models`] - TaskStatus, TaskUpdate y OperationResult
//! - [`client`] - Contrato del cliente, implementaciones HTTP y mock, selector
//! - [`tools`] - Herramientas invocables (update, get, history, health)
//! - [`config`] - Configuración con variables de entorno
//!
//! # Ejemplo de Uso
//!
//! ```rust,no_run
//! use pulse::client::create_client;
//! use pulse::config::ClientConfig;
//! use pulse::tools::ToolRegistry;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ClientConfig::load(None)?;
//! let client = create_client(&config);
//! let registry = ToolRegistry::new(client);
//!
//! let health = registry.health_check.as_ref();
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod logging;
pub mod models;
pub mod tools;

pub use client::{create_client, ClientKind, TaskManagerClient};
pub use config::ClientConfig;
pub use models::{OperationResult, TaskStatus, TaskUpdate};
pub use tools::ToolRegistry;
