
// This file organizes the integration tests into a cohesive test suite.
// Each module tests a specific aspect of the application:
// - smoke_tests: Basic functionality tests to ensure nothing is broken
// - calendar_gateway_mock: Mocking the Google Calendar API for testing
// - free_slot_tests: Free-slot search scenarios against a mock gateway
