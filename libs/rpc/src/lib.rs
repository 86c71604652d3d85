//! Protobuf contracts compiled at build time.

pub mod userapi {
    pub mod v1 {
        tonic::include_proto!("userapi.v1");
    }
}
