//! Fixed GraphQL query documents

/// Account creation date and badges of one user, by global id
pub const USER_PROFILE: &str = r#"
query GetUserProfile($userId: ID!) {
  node(id: $userId) {
    ... on User {
      id
      createdAt
      isSuperHost
      highlyRated
    }
  }
}
"#;

/// Most recent trip events of one user, stays and experiences interleaved.
/// The connection has no date filter.
pub const USER_TRIPS: &str = r#"
query GetUserTrips($userId: String!) {
  trips {
    tripEvents(
      userId: $userId
      sortDirection: DESC
      orderBy: STARTS_AT
      first: 100
    ) {
      edges {
        node {
          id
          eventType
          productType
          startsAt
          endsAt
          city
          confirmationCode
          stayReservation {
            confirmationCode
            startDate
            endDate
            numberOfNights
            listing {
              name
              supplyListing {
                location {
                  defaultAddress {
                    locality
                    administrativeZone
                    country
                  }
                }
              }
            }
          }
          experienceGuestProfile {
            template {
              nameOrPlaceholderName
              cityNative
              countryName
              isOnlineExperience
            }
            experienceReservation {
              startsAt
            }
          }
        }
      }
    }
  }
}
"#;

/// Reviews written by one user, by global id
pub const USER_REVIEWS: &str = r#"
query GetUserReviews($userId: ID!) {
  node(id: $userId) {
    ... on User {
      reviews(filter: WRITTEN_REVIEWS, first: 100) {
        edges {
          node {
            review {
              ... on UserProfileReview {
                id
                rating
                createdAt
              }
            }
          }
        }
      }
    }
  }
}
"#;

/// Wishlists of the viewer identified by the request headers
pub const VIEWER_WISHLISTS: &str = r#"
query GetUserWishlists {
  viewer {
    wishlists(first: 50) {
      edges {
        node {
          id
          name
          createdAt
          productCounts {
            staysCount
            experiencesCount
          }
        }
      }
    }
  }
}
"#;
