// SPDX-License-Identifier: Apache-2.0

use crate::{Error, Result};
use std::env;
#[cfg(feature = "async")]
use ttrpc::asynchronous::Client as TtrpcClient;
#[cfg(not(feature = "async"))]
use ttrpc::Client as TtrpcClient;

pub const DEFAULT_SERVER_ADDRESS: &str = "unix:///tmp/vision-annotator.sock";

/// Check that `server_address` is `<socket-type>://<address>` with a socket
/// type ttrpc can dial, and return the lowercased socket type.
pub fn parse_server_address(server_address: &str) -> Result<String> {
    if server_address.is_empty() {
        return Err(Error::InvalidArgument(
            "Server address cannot be empty".to_string(),
        ));
    }

    let fields: Vec<&str> = server_address.split("://").collect();

    if fields.len() != 2 || fields[1].is_empty() {
        return Err(Error::InvalidArgument(format!(
            "Invalid server address: {}",
            server_address
        )));
    }

    let scheme = fields[0].to_lowercase();

    match scheme.as_str() {
        "vsock" | "unix" => Ok(scheme),
        _ => Err(Error::Unsupported(format!("Socket type {}", scheme))),
    }
}

pub fn create_ttrpc_client(server_address: &str) -> Result<TtrpcClient> {
    parse_server_address(server_address)?;

    Ok(TtrpcClient::connect(server_address)?)
}

pub fn get_env_address() -> String {
    match env::var("VISION_RPC_ADDRESS") {
        Ok(addr) => addr,
        Err(_) => match env::var("VISION_RPC_ADDR") {
            Ok(addr) => addr,
            Err(_) => DEFAULT_SERVER_ADDRESS.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_addresses() {
        assert_eq!(
            parse_server_address("unix:///run/annotator.sock").unwrap(),
            "unix"
        );
        assert_eq!(parse_server_address("VSOCK://2:2048").unwrap(), "vsock");
        assert_eq!(parse_server_address(DEFAULT_SERVER_ADDRESS).unwrap(), "unix");
    }

    #[test]
    fn malformed_addresses() {
        for addr in ["", "unix", "unix://", "unix://a://b"] {
            assert!(
                matches!(parse_server_address(addr), Err(Error::InvalidArgument(_))),
                "{} should be rejected",
                addr
            );
        }
    }

    #[test]
    fn unsupported_socket_type() {
        assert!(matches!(
            parse_server_address("http://localhost:8080"),
            Err(Error::Unsupported(_))
        ));
        assert!(matches!(
            create_ttrpc_client("http://localhost:8080"),
            Err(Error::Unsupported(_))
        ));
    }
}
