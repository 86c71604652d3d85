/// Extension trait for Result types to convert errors to tonic::Status
///
/// # Example
/// ```ignore
/// use grpc_client::error::ToTonicResult;
///
/// let id = parse_uuid(&request.id).to_tonic()?;
/// ```
pub trait ToTonicResult<T> {
  /// Convert the error in this Result to a tonic::Status with INVALID_ARGUMENT code
  fn to_tonic(self) -> Result<T, tonic::Status>;

  /// Convert the error to a tonic::Status with a custom code
  fn to_tonic_with_code(self, code: tonic::Code) -> Result<T, tonic::Status>;
}

impl<T> ToTonicResult<T> for Result<T, String> {
  fn to_tonic(self) -> Result<T, tonic::Status> {
    self.map_err(tonic::Status::invalid_argument)
  }

  fn to_tonic_with_code(self, code: tonic::Code) -> Result<T, tonic::Status> {
    self.map_err(|e| tonic::Status::new(code, e))
  }
}

/// Extension trait for Option types to convert None to tonic::Status errors
///
/// # Example
/// ```ignore
/// use grpc_client::error::ToTonicOption;
///
/// let input = request.user.ok_or_invalid("user data is required")?;
/// ```
pub trait ToTonicOption<T> {
  /// Convert None to a tonic::Status with NOT_FOUND code
  fn ok_or_not_found(self, message: impl Into<String>) -> Result<T, tonic::Status>;

  /// Convert None to a tonic::Status with INVALID_ARGUMENT code
  fn ok_or_invalid(self, message: impl Into<String>) -> Result<T, tonic::Status>;
}

impl<T> ToTonicOption<T> for Option<T> {
  fn ok_or_not_found(self, message: impl Into<String>) -> Result<T, tonic::Status> {
    self.ok_or_else(|| tonic::Status::not_found(message.into()))
  }

  fn ok_or_invalid(self, message: impl Into<String>) -> Result<T, tonic::Status> {
    self.ok_or_else(|| tonic::Status::invalid_argument(message.into()))
  }
}
